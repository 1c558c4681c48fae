use super::types::{Category, SkillRecord};

/// Skills shown on the sphere, in layout order.
pub static SKILLS: &[SkillRecord] = &[
	SkillRecord {
		id: "devops_culture",
		name: "DevOps Culture",
		rating: 5,
		details: "Leveraging the best outcomes by following the best practices of DevOps.",
		category: Category::Methodology,
	},
	SkillRecord {
		id: "agile",
		name: "Agile",
		rating: 5,
		details: "Implementing the Agile Methodology to embrace the best practices.",
		category: Category::Methodology,
	},
	SkillRecord {
		id: "sdlc",
		name: "SDLC Opt.",
		rating: 5,
		details: "Implementing SDLC phases at each phase of the project lifecycle.",
		category: Category::Methodology,
	},
	SkillRecord {
		id: "cicd_principles",
		name: "CI/CD Principles",
		rating: 5,
		details: "Designing and building secured CI/CD pipelines.",
		category: Category::CiCdAutomation,
	},
	SkillRecord {
		id: "git_github",
		name: "Git & GitHub",
		rating: 5,
		details: "Excelled in distributed version control systems like Git and GitHub.",
		category: Category::VersionControl,
	},
	SkillRecord {
		id: "jenkins",
		name: "Jenkins",
		rating: 4,
		details: "Managed Jenkins instances, creating secured CI/CD pipelines.",
		category: Category::CiCdAutomation,
	},
	SkillRecord {
		id: "azure_devops",
		name: "Azure DevOps",
		rating: 4,
		details: "Excelling in cloud platforms like Azure.",
		category: Category::CiCdAutomation,
	},
	SkillRecord {
		id: "argocd",
		name: "Argo CD",
		rating: 4,
		details: "Implemented GitOps workflows using Argo CD by finding new ways of implementation.",
		category: Category::CiCdAutomation,
	},
	SkillRecord {
		id: "sonarqube",
		name: "SonarQube",
		rating: 4,
		details: "Integrated SonarQube for code quality and code smells.",
		category: Category::CodeQuality,
	},
	SkillRecord {
		id: "docker",
		name: "Docker",
		rating: 5,
		details: "Developed optimized Dockerfiles, managed images securely.",
		category: Category::ContainersOrchestration,
	},
	SkillRecord {
		id: "kubernetes",
		name: "Kubernetes",
		rating: 5,
		details: "Deployed, managed, scaled applications on K8S securely by following the best practices.",
		category: Category::ContainersOrchestration,
	},
	SkillRecord {
		id: "helm",
		name: "Helm",
		rating: 4,
		details: "Created Helm charts for templating K8s apps and deployed them as multiple sources of truth.",
		category: Category::ContainersOrchestration,
	},
	SkillRecord {
		id: "openshift",
		name: "OpenShift",
		rating: 3,
		details: "Worked with OpenShift for enterprise K8s and integrated ArgoCD for CD.",
		category: Category::ContainersOrchestration,
	},
];

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn ids_are_unique() {
		let ids: HashSet<_> = SKILLS.iter().map(|s| s.id).collect();
		assert_eq!(ids.len(), SKILLS.len());
	}

	#[test]
	fn ratings_are_in_range() {
		assert!(SKILLS.iter().all(|s| (1..=5).contains(&s.rating)));
	}
}
