use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::presentation::{Frame, NodeSprite, SHELL_COLOR};

const OUTLINE_COLOR: &str = "#0a0a12";

pub fn render(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, frame.width, frame.height);
	draw_shell(frame, ctx);
	for node in &frame.nodes {
		draw_node(node, frame.radius, ctx);
	}
}

fn draw_shell(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	if frame.shell_opacity <= 0.0 {
		return;
	}
	let (r, g, b) = SHELL_COLOR;
	ctx.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {})", frame.shell_opacity));
	ctx.set_line_width(0.75);
	for line in &frame.shell {
		let mut points = line.iter();
		let Some(&(x0, y0)) = points.next() else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(x0, y0);
		for &(x, y) in points {
			ctx.line_to(x, y);
		}
		ctx.stroke();
	}
}

fn draw_node(node: &NodeSprite, radius: f64, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (node.at.x, node.at.y);
	let font_px = node.font_px();

	if (node.hovered || node.selected) && font_px > 1.0 {
		let glow_radius = font_px * if node.selected { 2.6 } else { 2.0 };
		let alpha = if node.selected { 0.3 } else { 0.2 };
		if let Ok(gradient) = ctx.create_radial_gradient(x, y, font_px * 0.2, x, y, glow_radius) {
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {alpha})"));
			let _ = gradient.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	// Billboard: labels are always drawn flat to the screen.
	ctx.set_global_alpha(node.alpha(radius));
	ctx.set_font(&format!("600 {font_px:.2}px sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_line_join("round");
	ctx.set_line_width((font_px * 0.1).max(1.0));
	ctx.set_stroke_style_str(OUTLINE_COLOR);
	let _ = ctx.stroke_text(node.label, x, y);
	ctx.set_fill_style_str(node.color);
	let _ = ctx.fill_text(node.label, x, y);
	ctx.set_global_alpha(1.0);
}
