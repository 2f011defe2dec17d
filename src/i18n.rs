//! UI Messages
//!
//! The storefront is served in Russian (default) and Latvian.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Ru,
    Lv,
}

impl Lang {
    /// Accepts `ru`, `lv`, and region tags like `lv-LV`
    pub fn parse(s: &str) -> Self {
        let primary = s.trim().split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "lv" => Lang::Lv,
            _ => Lang::Ru,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AddedToCart,
    AddToCartFailed,
    InCart,
    ProductSaveFailed,
}

pub fn text(lang: Lang, msg: Message) -> &'static str {
    match (lang, msg) {
        (Lang::Ru, Message::AddedToCart) => "Товар добавлен в корзину",
        (Lang::Ru, Message::AddToCartFailed) => "Ошибка добавления в корзину",
        (Lang::Ru, Message::InCart) => "✓ В корзине",
        (Lang::Ru, Message::ProductSaveFailed) => "Не удалось сохранить товар",
        (Lang::Lv, Message::AddedToCart) => "Prece pievienota grozam",
        (Lang::Lv, Message::AddToCartFailed) => "Kļūda, pievienojot grozam",
        (Lang::Lv, Message::InCart) => "✓ Grozā",
        (Lang::Lv, Message::ProductSaveFailed) => "Neizdevās saglabāt preci",
    }
}
