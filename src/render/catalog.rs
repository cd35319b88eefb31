use clap::ValueEnum;

use crate::lookup_actor::LookupError;

/// Display language of the lookup view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Display strings for one locale. Error kinds stay in [`LookupError`]; only
/// their wording lives here.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub loading: &'static str,
    pub not_found: &'static str,
    /// Prefix for non-404 HTTP failures, followed by the status code.
    pub http_error: &'static str,
    pub card_title: &'static str,
    pub uid: &'static str,
    pub customer: &'static str,
    pub address: &'static str,
    pub amount: &'static str,
    pub items: &'static str,
}

pub static EN: Messages = Messages {
    title: "Order lookup",
    loading: "Loading...",
    not_found: "Order not found",
    http_error: "Error",
    card_title: "Order details",
    uid: "UID",
    customer: "Customer",
    address: "Address",
    amount: "Amount",
    items: "Items",
};

pub static RU: Messages = Messages {
    title: "Поиск заказа",
    loading: "Загрузка...",
    not_found: "Заказ не найден",
    http_error: "Ошибка",
    card_title: "Информация о заказе",
    uid: "UID",
    customer: "Покупатель",
    address: "Адрес",
    amount: "Сумма",
    items: "Товары",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn error_message(&self, error: &LookupError) -> String {
        match error {
            LookupError::NotFound => self.not_found.to_string(),
            LookupError::Http { code } => format!("{}: {}", self.http_error, code),
            LookupError::Other { message } => message.clone(),
        }
    }
}
