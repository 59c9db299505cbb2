//! User-facing text.

pub const FILL_ALL_FIELDS: &str = "Заполните все поля";
pub const INVALID_EMAIL: &str = "Некорректный email";
pub const PASSWORD_TOO_SHORT: &str = "Пароль должен содержать минимум 8 символов";
pub const PASSWORD_NEEDS_DIGIT: &str = "Пароль должен содержать минимум одну цифру";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Пароль должен содержать минимум одну заглавную букву";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Пароль должен содержать минимум один спец. символ";

pub const REGISTER_FAILED: &str = "Ошибка регистрации";
pub const LOGIN_FAILED: &str = "Неверные данные";
pub const CONNECTION_FAILED: &str = "Ошибка соединения с сервером";

pub const ORDER_AUTH_REQUIRED: &str = "Войдите в аккаунт для оформления заказа";
pub const ORDER_PENDING: &str = "Оформление заказа...";
pub const ORDER_FAILED: &str = "Ошибка создания заказа";
pub const SESSION_EXPIRED: &str = "Сессия истекла. Пожалуйста, войдите снова.";

pub const ORDERS_SIGNED_OUT: &str = "Войдите в аккаунт для просмотра заказов.";
pub const ORDERS_EMPTY: &str = "Нет оформленных заказов пока.";
pub const ORDERS_FAILED: &str = "Ошибка загрузки заказов. Проверьте соединение с сервером.";

pub const CONTACT_SENT: &str = "Сообщение отправлено! Мы ответим вам в ближайшее время.";

pub const GUEST: &str = "Гость";
pub const LOADING_MOVIES: &str = "Загрузка фильмов...";
pub const LOADING_MOVIE: &str = "Загрузка информации о фильме...";

pub fn order_confirmed(email: &str) -> String {
    format!("Заказ создан! Мы отправили письмо с деталями на {email}")
}

pub fn welcome(name: &str) -> String {
    format!("Добро пожаловать, {name}")
}

pub fn greeting(name: &str) -> String {
    format!("Привет, {name}")
}
