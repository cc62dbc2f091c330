// frontend_foodgram/src/content.rs
use crate::head::PageMeta;

/// A heading followed by a fixed list of items.
#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct PageContent {
    pub heading: &'static str,
    pub sections: &'static [Section],
}

pub const TECHNOLOGIES_META: PageMeta = PageMeta {
    title: "О проекте",
    description: "Фудграм - Технологии",
    og_title: "О проекте",
};

pub const TECHNOLOGIES: PageContent = PageContent {
    heading: "Технологии проекта",
    sections: &[
        Section {
            heading: "Бекенд",
            items: &[
                "Python 3.9",
                "Django 4.2.22",
                "Django REST Framework 3.16.0",
                "Djoser 2.3.1 (аутентификация)",
                "PostgreSQL 13 (база данных)",
                "Gunicorn 23.0.0 (веб-сервер)",
                "Psycopg2 2.9.9 (драйвер PostgreSQL)",
                "Pillow 11.2.1 (обработка изображений)",
                "Django-filter 25.1 (фильтрация данных)",
                "Nginx 1.19 (прокси-сервер)",
            ],
        },
        Section {
            heading: "Фронтенд",
            items: &["React"],
        },
        Section {
            heading: "Инфраструктура",
            items: &["Docker", "Docker Compose"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    impl PageContent {
        fn section(&self, heading: &str) -> Option<&Section> {
            self.sections.iter().find(|section| section.heading == heading)
        }

        fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
            self.sections.iter().map(|section| section.heading)
        }
    }

    #[test]
    fn sections_keep_their_order() {
        let headings: Vec<_> = TECHNOLOGIES.headings().collect();
        assert_eq!(headings, ["Бекенд", "Фронтенд", "Инфраструктура"]);
    }

    #[test]
    fn backend_items_span_python_to_nginx() {
        let backend = TECHNOLOGIES.section("Бекенд").unwrap();
        assert_eq!(backend.items.len(), 10);
        assert_eq!(backend.items.first(), Some(&"Python 3.9"));
        assert_eq!(backend.items.last(), Some(&"Nginx 1.19 (прокси-сервер)"));
        assert_eq!(backend.items[3], "Djoser 2.3.1 (аутентификация)");
    }

    #[test]
    fn frontend_and_infrastructure_items() {
        assert_eq!(TECHNOLOGIES.section("Фронтенд").unwrap().items, ["React"]);
        assert_eq!(
            TECHNOLOGIES.section("Инфраструктура").unwrap().items,
            ["Docker", "Docker Compose"]
        );
    }

    #[test]
    fn unknown_section_is_none() {
        assert!(TECHNOLOGIES.section("Мобильное приложение").is_none());
    }

    #[test]
    fn meta_values() {
        assert_eq!(TECHNOLOGIES_META.title, "О проекте");
        assert_eq!(TECHNOLOGIES_META.description, "Фудграм - Технологии");
        assert_eq!(TECHNOLOGIES_META.og_title, "О проекте");
    }
}
