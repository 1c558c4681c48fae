pub mod contact;
pub mod loading;
pub mod skill_sphere;
pub mod timer;
pub mod tween;
