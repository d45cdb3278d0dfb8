//! Static page copy: navigation, hero, about, blog, contacts, footer.

use chrono::{Datelike, NaiveDate};

use rodentia_catalog::seed::HOUSE_IMAGE;

pub const BRAND: &str = "RODENTIA";
pub const TAGLINE: &str = "Премиум-изделия для грызунов";

/// An in-page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// Element id, also the anchor (`#catalog`).
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const HOME: NavSection = NavSection { id: "home", label: "Главная" };
pub const CATALOG: NavSection = NavSection { id: "catalog", label: "Каталог" };
pub const ABOUT: NavSection = NavSection { id: "about", label: "О бренде" };
pub const GALLERY: NavSection = NavSection { id: "gallery", label: "Галерея" };
pub const BLOG: NavSection = NavSection { id: "blog", label: "Блог" };
pub const CONTACTS: NavSection = NavSection { id: "contacts", label: "Контакты" };

pub const NAV_SECTIONS: [NavSection; 6] = [HOME, CATALOG, ABOUT, GALLERY, BLOG, CONTACTS];

pub struct Hero {
    pub badge: &'static str,
    pub headline: [&'static str; 2],
    pub lead: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: Hero = Hero {
    badge: TAGLINE,
    headline: ["Элегантность в каждой", "детали"],
    lead: "Создаём изделия высокого класса для самых взыскательных владельцев домашних грызунов",
    primary_cta: "Смотреть каталог",
    secondary_cta: "О бренде",
};

pub const CATALOG_LEAD: &str = "Тщательно отобранные изделия премиум-класса";
pub const CATALOG_EMPTY: &str = "Нет товаров, подходящих под выбранные фильтры";
pub const CARD_CTA: &str = "Подробнее";

pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "RODENTIA — это воплощение элегантности и заботы о ваших питомцах. Мы создаём премиальные изделия, \
     сочетающие высокую эстетику с функциональностью.",
    "Каждый предмет изготовлен вручную из натуральных материалов, безопасных для грызунов. \
     Наша миссия — превратить уход за питомцами в эстетическое удовольствие.",
];

pub const ABOUT_STATS: [Stat; 3] = [
    Stat { value: "100%", caption: "Натуральные материалы" },
    Stat { value: "5+", caption: "Лет опыта" },
    Stat { value: "2000+", caption: "Счастливых клиентов" },
];

pub const ABOUT_IMAGE: &str = HOUSE_IMAGE;

pub const GALLERY_LEAD: &str = "Изделия в интерьере и жизни";
pub const GALLERY_SIZE: usize = 6;

pub struct BlogPost {
    pub title: &'static str,
    pub published: NaiveDate,
    pub excerpt: &'static str,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}

pub const BLOG_LEAD: &str = "Советы и истории о заботе о грызунах";
pub const BLOG_CTA: &str = "Читать далее";

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Как выбрать идеальный домик",
        published: date(2024, 12, 15),
        excerpt: "Руководство по выбору комфортного и безопасного жилища для вашего питомца.",
    },
    BlogPost {
        title: "Натуральные материалы: почему это важно",
        published: date(2024, 12, 10),
        excerpt: "Разбираемся, какие материалы безопасны для грызунов и как их распознать.",
    },
    BlogPost {
        title: "Создание премиум-интерьера",
        published: date(2024, 12, 5),
        excerpt: "Советы по созданию стильного и функционального пространства для питомца.",
    },
];

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

/// Long Russian date, e.g. `15 декабря 2024`.
pub fn format_ru_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

pub struct ContactItem {
    /// Icon name, rendered as a css class only.
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

pub const CONTACTS_LEAD: &str = "Свяжитесь с нами любым удобным способом";

pub const CONTACT_ITEMS: [ContactItem; 3] = [
    ContactItem { icon: "mail", title: "Email", value: "info@rodentia.ru" },
    ContactItem { icon: "phone", title: "Телефон", value: "+7 (495) 123-45-67" },
    ContactItem { icon: "map-pin", title: "Адрес", value: "Москва, ул. Примерная, д. 1" },
];

/// One field of the contact form.
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// `None` renders a textarea.
    pub input_type: Option<&'static str>,
}

pub const CONTACT_FORM: [FormField; 3] = [
    FormField { name: "name", label: "Имя", placeholder: "Введите ваше имя", input_type: Some("text") },
    FormField { name: "email", label: "Email", placeholder: "your@email.com", input_type: Some("email") },
    FormField { name: "message", label: "Сообщение", placeholder: "Расскажите о вашем запросе", input_type: None },
];

pub const CONTACT_SUBMIT: &str = "Отправить";

pub const FOOTER_COMPANY_TITLE: &str = "Компания";
pub const FOOTER_COMPANY: [NavSection; 3] = [ABOUT, BLOG, CONTACTS];
pub const FOOTER_SOCIAL_TITLE: &str = "Соцсети";
pub const SOCIAL_LINKS: [&str; 3] = ["Instagram", "Facebook", "Twitter"];
pub const COPYRIGHT: &str = "© 2024 RODENTIA. Все права защищены.";
