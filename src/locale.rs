//! User-facing text.
//!
//! All strings the page shows live here so they can be swapped without
//! touching validation or workflow code. The default is Russian; another
//! locale can be loaded from JSON with [`Messages::from_json`]. Keys missing
//! from the JSON fall back to the Russian text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub name_error: String,
    pub phone_error: String,
    pub email_error: String,
    pub model_error: String,
    pub address_error: String,
    pub consent_error: String,

    pub error_title: String,
    pub error_intro: String,
    pub success_title: String,
    pub success_body: String,

    pub submit_label: String,
    pub busy_label: String,
    pub close_label: String,
    pub order_button: String,
    pub model_placeholder: String,
    pub phone_hint: String,

    pub name_label: String,
    pub phone_label: String,
    pub email_label: String,
    pub model_label: String,
    pub address_label: String,
    pub consent_label: String,

    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta: String,
    pub models_title: String,
    pub order_title: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_error: "Имя должно содержать минимум 2 символа".into(),
            phone_error: "Введите корректный номер телефона".into(),
            email_error: "Введите корректный email адрес".into(),
            model_error: "Пожалуйста, выберите модель".into(),
            address_error: "Адрес должен содержать минимум 10 символов".into(),
            consent_error: "Необходимо согласие на обработку персональных данных".into(),

            error_title: "Ошибка в форме".into(),
            error_intro: "Пожалуйста, исправьте следующие ошибки:".into(),
            success_title: "Заказ оформлен!".into(),
            success_body: "Спасибо за заказ! Наш менеджер свяжется с вами в ближайшее время."
                .into(),

            submit_label: "Оформить заказ".into(),
            busy_label: "Отправка...".into(),
            close_label: "Закрыть".into(),
            order_button: "Заказать".into(),
            model_placeholder: "Выберите модель".into(),
            phone_hint: "Формат: +7 (999) 123-45-67".into(),

            name_label: "Ваше имя".into(),
            phone_label: "Телефон".into(),
            email_label: "Email".into(),
            model_label: "Модель".into(),
            address_label: "Адрес доставки".into(),
            consent_label: "Я согласен на обработку персональных данных".into(),

            hero_title: "Электросамокаты серии X".into(),
            hero_subtitle: "Лёгкие, быстрые и надёжные. Доставка по всей России.".into(),
            hero_cta: "Выбрать модель".into(),
            models_title: "Модели".into(),
            order_title: "Оформление заказа".into(),
        }
    }
}

impl Messages {
    /// Parse a locale from JSON, filling absent keys from the default.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid locale JSON: {}", e))
    }
}
