//! Static site data: contact details, tech stack, and featured projects.
//!
//! This is the single place content authors touch; everything else renders
//! from these records.

use once_cell::sync::Lazy;

use crate::domain::contact::ContactInfo;
use crate::domain::project::{Project, ProjectCategory};
use crate::domain::tech::{TechCategory, TechItem};

pub static CONTACT_INFO: Lazy<ContactInfo> = Lazy::new(|| ContactInfo {
    email: "jairbenitez29@gmail.com".to_string(),
    whatsapp: "+573135399868".to_string(),
    github: Some("https://github.com/jairbenitez29".to_string()),
    linkedin: Some("https://linkedin.com/in/jair-benitez-71522a37a".to_string()),
    twitter: None,
    instagram: Some("https://www.instagram.com/jairbenitez13".to_string()),
});

fn tech(name: &str, icon: &str, category: TechCategory) -> TechItem {
    TechItem {
        name: name.to_string(),
        icon: icon.to_string(),
        category,
    }
}

pub static TECH_STACK: Lazy<Vec<TechItem>> = Lazy::new(|| {
    use TechCategory::*;
    vec![
        tech("TypeScript", "typescript", Frontend),
        tech("JavaScript", "javascript", Frontend),
        tech("Next.js", "nextjs", Frontend),
        tech("React", "react", Frontend),
        tech("Tailwind CSS", "tailwind", Frontend),
        tech("HTML", "html", Frontend),
        tech("Node.js", "nodejs", Backend),
        tech("tRPC", "trpc", Backend),
        tech("Prisma", "prisma", Backend),
        tech("Zod", "zod", Backend),
        tech("PHP", "php", Backend),
        tech("Python", "python", Backend),
        tech("MySQL", "mysql", Database),
        tech("AWS", "aws", Cloud),
        tech("Hostinger", "hostinger", Cloud),
        tech("n8n", "n8n", Tools),
        tech("Git", "git", Tools),
    ]
});

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "1".to_string(),
            title: "Sistema de Educación Educadia".to_string(),
            description: "Plataforma integral para la gestión y aplicación de exámenes \
                          escolares con sistema de retroalimentación automatizada."
                .to_string(),
            image: "/proyectosdestacados/sistemaeducadia/educadia1.png".to_string(),
            technologies: [
                "TypeScript",
                "JavaScript",
                "React",
                "Next.js",
                "Prisma",
                "tRPC",
                "Tailwind CSS",
                "Zod",
                "MySQL",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            demo_url: None,
            github_url: None,
            client: Some("Educadia".to_string()),
            category: ProjectCategory::Specialized,
            full_description: Some(
                "Sistema robusto diseñado para la administración y aplicación de \
                 evaluaciones académicas en instituciones educativas. Implementa \
                 autenticación de múltiples roles, panel administrativo completo para \
                 la gestión de exámenes, asignación masiva de evaluaciones, seguimiento \
                 individual de resultados por estudiante, retroalimentación inmediata de \
                 respuestas correctas e incorrectas, y generación de reportes detallados \
                 exportables a Excel con filtros personalizables por escuela y grado \
                 académico."
                    .to_string(),
            ),
            images: (1..=7)
                .map(|i| format!("/proyectosdestacados/sistemaeducadia/educadia{i}.png"))
                .collect(),
            video: None,
        },
        Project {
            id: "2".to_string(),
            title: "Sistema de Seguimiento por °C".to_string(),
            description: "Plataforma de monitoreo en tiempo real de temperatura para \
                          refrigeradores clínicos con visualización de datos y generación \
                          de reportes."
                .to_string(),
            image: "/proyectosdestacados/SistemaTemp/Temp1.png".to_string(),
            technologies: [
                "JavaScript",
                "React",
                "Node.js",
                "Express",
                "Chart.js",
                "MySQL",
                "JWT",
                "PDFKit",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            demo_url: None,
            github_url: None,
            client: Some("Clínica local".to_string()),
            category: ProjectCategory::Specialized,
            full_description: Some(
                "Sistema especializado de monitoreo térmico para refrigeradores clínicos \
                 que garantiza el control riguroso de las condiciones de almacenamiento. \
                 La plataforma implementa autenticación segura mediante JWT, gestión \
                 diferenciada de roles (administrador y operario), asignación dinámica de \
                 equipos a operadores, visualización en tiempo real mediante ploteo \
                 automático de datos, dashboard administrativo para supervisión integral, \
                 y generación de reportes en PDF con filtros avanzados por refrigerador, \
                 mes y año para auditorías y cumplimiento normativo."
                    .to_string(),
            ),
            images: (1..=9)
                .map(|i| format!("/proyectosdestacados/SistemaTemp/Temp{i}.png"))
                .collect(),
            video: Some("/proyectosdestacados/SistemaTemp/SistemTemp.mp4".to_string()),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique_and_non_empty() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn every_project_thumbnail_and_gallery_entry_is_set() {
        for project in PROJECTS.iter() {
            assert!(!project.image.is_empty(), "{} missing thumbnail", project.id);
            assert!(project.images.iter().all(|img| !img.is_empty()));
            assert_eq!(
                project.gallery_len(),
                project.images.len() + usize::from(project.video.is_some())
            );
        }
    }

    #[test]
    fn tech_stack_covers_every_category() {
        for category in TechCategory::all() {
            assert!(
                TECH_STACK.iter().any(|item| item.category == category),
                "no tech item in category {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn contact_info_has_wa_compatible_number() {
        assert!(!CONTACT_INFO.whatsapp_digits().is_empty());
        assert!(CONTACT_INFO
            .whatsapp_digits()
            .chars()
            .all(|c| c.is_ascii_digit()));
    }
}
