use yew_router::Routable;

use crate::nav::state::Language;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.es,
            Language::En => self.en,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub label: Localized,
    pub href: &'static str,
    pub icon: Option<&'static str>,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn link(label: Localized, href: &'static str) -> Self {
        Self {
            label,
            href,
            icon: None,
            children: &[],
        }
    }

    pub fn route(&self) -> Option<Route> {
        Route::recognize(self.href)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when `path` is this item or one of its children.
    pub fn is_active(&self, path: &str) -> bool {
        self.href == path || self.children.iter().any(|child| child.is_active(path))
    }
}

pub const SERVICES: &[MenuItem] = &[
    MenuItem {
        label: Localized::new("Desarrollo web", "Web development"),
        href: "/services/web",
        icon: Some("◧"),
        children: &[],
    },
    MenuItem {
        label: Localized::new("Branding", "Branding"),
        href: "/services/branding",
        icon: Some("◎"),
        children: &[],
    },
    MenuItem {
        label: Localized::new("Marketing digital", "Digital marketing"),
        href: "/services/marketing",
        icon: Some("◭"),
        children: &[],
    },
    MenuItem {
        label: Localized::new("Apps móviles", "Mobile apps"),
        href: "/services/apps",
        icon: Some("▣"),
        children: &[],
    },
];

pub const MAIN_MENU: &[MenuItem] = &[
    MenuItem::link(Localized::new("Inicio", "Home"), "/"),
    MenuItem::link(Localized::new("Nosotros", "About"), "/about"),
    MenuItem {
        label: Localized::new("Servicios", "Services"),
        href: "/services/web",
        icon: None,
        children: SERVICES,
    },
    MenuItem::link(Localized::new("Portafolio", "Portfolio"), "/portfolio"),
    MenuItem::link(Localized::new("Contacto", "Contact"), "/contact"),
];

pub fn service_label(slug: &str, language: Language) -> Option<&'static str> {
    SERVICES
        .iter()
        .find(|item| item.href.rsplit('/').next() == Some(slug))
        .map(|item| item.label.get(language))
}
