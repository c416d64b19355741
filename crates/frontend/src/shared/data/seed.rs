//! Демо-данные консоли.
//!
//! Страницы сидируются один раз при создании состояния и заменяют набор
//! целиком по кнопке «Обновить». Состав детерминированный: никаких
//! случайных значений, чтобы выдача была воспроизводимой.

use contracts::domain::a001_brand::Brand;
use contracts::domain::a002_buyer::Buyer;
use contracts::domain::a003_sales_manager::SalesManager;
use contracts::domain::a004_product::Product;
use contracts::domain::a005_resource::Resource;
use contracts::domain::a006_order::Order;
use contracts::domain::a007_event::{EventStatus, ShowroomEvent};
use contracts::domain::a008_story::{Story, StoryStatus};
use contracts::enums::{AccountStatus, Availability, OrderStatus, SubscriptionPlan};

fn product(
    code: &str,
    name: &str,
    category: &str,
    sub_category: &str,
    price: &str,
    material: &str,
    availability: Availability,
    season: &str,
    color: &str,
    size_range: &str,
    brand_name: &str,
    certificates: &[&str],
    minimum_order: &str,
    lead_time: &str,
    shipping_from: &str,
    is_exclusive: bool,
) -> Product {
    Product::new(
        code.to_string(),
        name.to_string(),
        category.to_string(),
        sub_category.to_string(),
        price.to_string(),
        material.to_string(),
        availability,
        season.to_string(),
        color.to_string(),
        size_range.to_string(),
        brand_name.to_string(),
        certificates.iter().map(|c| c.to_string()).collect(),
        minimum_order.to_string(),
        lead_time.to_string(),
        shipping_from.to_string(),
        is_exclusive,
    )
}

/// Каталог товаров (страница байера)
pub fn seed_products() -> Vec<Product> {
    let products = vec![
        product(
            "PRD-001", "Платье-комбинация", "Платья", "Вечерние", "170 000 ₽", "Шёлк",
            Availability::InStock, "SS26", "Чёрный", "XS–L", "Aurora Atelier",
            &["GOTS"], "10 шт", "2–4 недели", "Москва", true,
        ),
        product(
            "PRD-002", "Пальто оверсайз", "Верхняя одежда", "Пальто", "280 000 ₽", "Шерсть",
            Availability::MadeToOrder, "FW25", "Кэмел", "S–XL", "Severny",
            &[], "5 шт", "6–8 недель", "Санкт-Петербург", false,
        ),
        product(
            "PRD-003", "Платье-рубашка", "Платья", "Повседневные", "96 000 ₽", "Хлопок",
            Availability::InStock, "SS26", "Белый", "XS–XL", "Lumen Studio",
            &["GOTS", "OEKO-TEX"], "15 шт", "2–4 недели", "Москва", false,
        ),
        product(
            "PRD-004", "Джемпер с косами", "Трикотаж", "Джемперы", "54 000 ₽", "Кашемир",
            Availability::InStock, "FW25", "Молочный", "S–L", "KRAI",
            &["OEKO-TEX"], "10 шт", "4–6 недель", "Москва", false,
        ),
        product(
            "PRD-005", "Тренч двубортный", "Верхняя одежда", "Тренчи", "210 000 ₽", "Хлопок",
            Availability::InStock, "SS26", "Бежевый", "XS–L", "Aurora Atelier",
            &["BCI"], "5 шт", "4–6 недель", "Милан", true,
        ),
        product(
            "PRD-006", "Кардиган свободного кроя", "Трикотаж", "Кардиганы", "61 000 ₽", "Шерсть",
            Availability::MadeToOrder, "FW25", "Серый", "Единый", "KRAI",
            &[], "12 шт", "4–6 недель", "Москва", false,
        ),
        product(
            "PRD-007", "Платье-футляр", "Платья", "Коктейльные", "120 000 ₽", "Вискоза",
            Availability::InStock, "SS26", "Изумрудный", "XS–M", "Dom Vetra",
            &["OEKO-TEX"], "8 шт", "2–4 недели", "Санкт-Петербург", false,
        ),
        product(
            "PRD-008", "Жакет приталенный", "Костюмы", "Жакеты", "145 000 ₽", "Шерсть",
            Availability::InStock, "FW25", "Графит", "S–XL", "Atelier 9",
            &[], "6 шт", "4–6 недель", "Москва", false,
        ),
        product(
            "PRD-009", "Брюки палаццо", "Костюмы", "Брюки", "88 000 ₽", "Лён",
            Availability::InStock, "SS26", "Песочный", "XS–L", "Atelier 9",
            &["GOTS"], "10 шт", "2–4 недели", "Стамбул", false,
        ),
        product(
            "PRD-010", "Пуховик стёганый", "Верхняя одежда", "Пуховики", "190 000 ₽", "Полиэстер",
            Availability::MadeToOrder, "FW25", "Чёрный", "S–XXL", "Severny",
            &[], "8 шт", "6–8 недель", "Санкт-Петербург", false,
        ),
        product(
            "PRD-011", "Платье макси со сборкой", "Платья", "Вечерние", "205 000 ₽", "Шёлк",
            Availability::MadeToOrder, "SS26", "Пудровый", "XS–M", "Dom Vetra",
            &["GOTS"], "5 шт", "6–8 недель", "Милан", true,
        ),
        product(
            "PRD-012", "Сумка-тоут кожаная", "Аксессуары", "Сумки", "74 000 ₽", "Кожа",
            Availability::InStock, "SS26", "Коньячный", "Единый", "Lumen Studio",
            &[], "10 шт", "2–4 недели", "Стамбул", false,
        ),
        product(
            "PRD-013", "Платок из твила", "Аксессуары", "Платки", "23 000 ₽", "Шёлк",
            Availability::InStock, "SS26", "Мультиколор", "Единый", "Aurora Atelier",
            &["OEKO-TEX"], "20 шт", "2–4 недели", "Москва", false,
        ),
        product(
            "PRD-014", "Джемпер из мериноса", "Трикотаж", "Джемперы", "67 000 ₽", "Шерсть",
            Availability::InStock, "FW25", "Бордовый", "S–XL", "Severny",
            &["OEKO-TEX"], "10 шт", "4–6 недель", "Санкт-Петербург", false,
        ),
        product(
            "PRD-015", "Платье-трапеция", "Платья", "Повседневные", "82 000 ₽", "Хлопок",
            Availability::InStock, "SS26", "Голубой", "XS–XL", "Lumen Studio",
            &["GOTS", "BCI"], "15 шт", "2–4 недели", "Москва", false,
        ),
        product(
            "PRD-016", "Пальто-халат", "Верхняя одежда", "Пальто", "255 000 ₽", "Кашемир",
            Availability::MadeToOrder, "FW25", "Молочный", "S–L", "Dom Vetra",
            &[], "4 шт", "6–8 недель", "Милан", true,
        ),
    ];

    for p in &products {
        if let Err(e) = p.validate() {
            log::warn!("seed: товар '{}' невалиден: {}", p.base.description, e);
        }
    }
    products
}

/// Справочник брендов
pub fn seed_brands() -> Vec<Brand> {
    let brands = vec![
        Brand::new(
            "BRD-001".to_string(), "Aurora Atelier".to_string(), AccountStatus::Active,
            SubscriptionPlan::Premium, "Анна Соколова".to_string(),
            "anna@aurora-atelier.ru".to_string(), "Москва".to_string(), 48, 6,
        ),
        Brand::new(
            "BRD-002".to_string(), "Severny".to_string(), AccountStatus::Active,
            SubscriptionPlan::Business, "Пётр Ильин".to_string(),
            "hello@severny.co".to_string(), "Санкт-Петербург".to_string(), 35, 4,
        ),
        Brand::new(
            "BRD-003".to_string(), "KRAI".to_string(), AccountStatus::Active,
            SubscriptionPlan::Start, "Мария Крайнова".to_string(),
            "mk@krai.moscow".to_string(), "Москва".to_string(), 21, 2,
        ),
        Brand::new(
            "BRD-004".to_string(), "Lumen Studio".to_string(), AccountStatus::Pending,
            SubscriptionPlan::Start, "Дарья Лапина".to_string(),
            "studio@lumen.ru".to_string(), "Екатеринбург".to_string(), 17, 0,
        ),
        Brand::new(
            "BRD-005".to_string(), "Dom Vetra".to_string(), AccountStatus::Active,
            SubscriptionPlan::Business, "Илья Ветров".to_string(),
            "iv@domvetra.com".to_string(), "Милан".to_string(), 29, 5,
        ),
        Brand::new(
            "BRD-006".to_string(), "Atelier 9".to_string(), AccountStatus::Inactive,
            SubscriptionPlan::Start, "Ольга Девятова".to_string(),
            "o9@atelier9.ru".to_string(), "Казань".to_string(), 12, 0,
        ),
        Brand::new(
            "BRD-007".to_string(), "Tkan i Forma".to_string(), AccountStatus::Pending,
            SubscriptionPlan::Business, "Сергей Форин".to_string(),
            "sf@tkaniforma.ru".to_string(), "Новосибирск".to_string(), 8, 0,
        ),
    ];

    for b in &brands {
        if let Err(e) = b.validate() {
            log::warn!("seed: бренд '{}' невалиден: {}", b.base.description, e);
        }
    }
    brands
}

/// Справочник байеров
pub fn seed_buyers() -> Vec<Buyer> {
    let buyers = vec![
        Buyer::new(
            "BYR-001".to_string(), "ЦУМ Байинг".to_string(), AccountStatus::Active,
            "Екатерина Мельник".to_string(), "e.melnik@tsum-buying.ru".to_string(),
            "Москва".to_string(), 24, "12 400 000 ₽".to_string(),
        ),
        Buyer::new(
            "BYR-002".to_string(), "Concept Nord".to_string(), AccountStatus::Active,
            "Алексей Норд".to_string(), "buy@conceptnord.ru".to_string(),
            "Санкт-Петербург".to_string(), 17, "6 800 000 ₽".to_string(),
        ),
        Buyer::new(
            "BYR-003".to_string(), "Галерея 7".to_string(), AccountStatus::Active,
            "Нина Гаврилова".to_string(), "ng@gallery7.ru".to_string(),
            "Екатеринбург".to_string(), 9, "3 400 000 ₽".to_string(),
        ),
        Buyer::new(
            "BYR-004".to_string(), "Store Vostok".to_string(), AccountStatus::Pending,
            "Тимур Восканян".to_string(), "tv@storevostok.ru".to_string(),
            "Владивосток".to_string(), 0, "0 ₽".to_string(),
        ),
        Buyer::new(
            "BYR-005".to_string(), "Modnaya Lavka".to_string(), AccountStatus::Active,
            "Светлана Лавкина".to_string(), "sl@modlavka.ru".to_string(),
            "Казань".to_string(), 12, "4 150 000 ₽".to_string(),
        ),
        Buyer::new(
            "BYR-006".to_string(), "Boutique Lina".to_string(), AccountStatus::Inactive,
            "Лина Осипова".to_string(), "lina@blina.ru".to_string(),
            "Сочи".to_string(), 3, "820 000 ₽".to_string(),
        ),
    ];

    for b in &buyers {
        if let Err(e) = b.validate() {
            log::warn!("seed: байер '{}' невалиден: {}", b.base.description, e);
        }
    }
    buyers
}

/// Менеджеры продаж платформы
pub fn seed_sales_managers() -> Vec<SalesManager> {
    let managers = vec![
        SalesManager::new(
            "MGR-001".to_string(), "Виктория Климова".to_string(), AccountStatus::Active,
            "v.klimova@podium.ru".to_string(), "+7 903 111-22-33".to_string(), 12,
        ),
        SalesManager::new(
            "MGR-002".to_string(), "Андрей Сафонов".to_string(), AccountStatus::Active,
            "a.safonov@podium.ru".to_string(), "+7 916 444-55-66".to_string(), 9,
        ),
        SalesManager::new(
            "MGR-003".to_string(), "Полина Юдина".to_string(), AccountStatus::Pending,
            "p.yudina@podium.ru".to_string(), "+7 921 777-88-99".to_string(), 0,
        ),
        SalesManager::new(
            "MGR-004".to_string(), "Глеб Макаров".to_string(), AccountStatus::Inactive,
            "g.makarov@podium.ru".to_string(), "+7 985 222-33-44".to_string(), 5,
        ),
    ];

    for m in &managers {
        if let Err(e) = m.validate() {
            log::warn!("seed: менеджер '{}' невалиден: {}", m.base.description, e);
        }
    }
    managers
}

/// Библиотека ресурсов
pub fn seed_resources() -> Vec<Resource> {
    let resources = vec![
        Resource::new(
            "RES-001".to_string(), "Гайд по оформлению карточек".to_string(),
            "Гайды".to_string(), "2.4 МБ".to_string(),
            "/files/card-guide.pdf".to_string(),
            "Требования к фото и описаниям товаров".to_string(),
        ),
        Resource::new(
            "RES-002".to_string(), "Лукбук SS26: ключевые тренды".to_string(),
            "Лукбуки".to_string(), "18 МБ".to_string(),
            "/files/lookbook-ss26.pdf".to_string(),
            "Подборка витринных образов сезона".to_string(),
        ),
        Resource::new(
            "RES-003".to_string(), "Шаблон прайс-листа".to_string(),
            "Шаблоны".to_string(), "310 КБ".to_string(),
            "/files/pricelist-template.xlsx".to_string(),
            "Формат загрузки оптовых цен".to_string(),
        ),
        Resource::new(
            "RES-004".to_string(), "Гайд по минимальным партиям".to_string(),
            "Гайды".to_string(), "1.1 МБ".to_string(),
            "/files/moq-guide.pdf".to_string(),
            "Как выставлять MOQ и сроки производства".to_string(),
        ),
        Resource::new(
            "RES-005".to_string(), "Лукбук FW25: вечерняя капсула".to_string(),
            "Лукбуки".to_string(), "22 МБ".to_string(),
            "/files/lookbook-fw25.pdf".to_string(),
            "Вечерние образы осень-зима".to_string(),
        ),
        Resource::new(
            "RES-006".to_string(), "Шаблон карточки бренда".to_string(),
            "Шаблоны".to_string(), "540 КБ".to_string(),
            "/files/brand-card-template.docx".to_string(),
            "Структура презентации бренда для байеров".to_string(),
        ),
        Resource::new(
            "RES-007".to_string(), "Регламент показов шоурума".to_string(),
            "Гайды".to_string(), "860 КБ".to_string(),
            "/files/showroom-rules.pdf".to_string(),
            "Правила участия в событиях площадки".to_string(),
        ),
        Resource::new(
            "RES-008".to_string(), "Чек-лист перед отгрузкой".to_string(),
            "Шаблоны".to_string(), "220 КБ".to_string(),
            "/files/shipping-checklist.pdf".to_string(),
            "Проверка заказа перед передачей в доставку".to_string(),
        ),
    ];

    for r in &resources {
        if let Err(e) = r.validate() {
            log::warn!("seed: ресурс '{}' невалиден: {}", r.base.description, e);
        }
    }
    resources
}

/// Заказы
pub fn seed_orders() -> Vec<Order> {
    let orders = vec![
        Order::new(
            "ORD-2026-014".to_string(), "Aurora Atelier".to_string(), "ЦУМ Байинг".to_string(),
            "2026-07-14".to_string(), "1 250 000 ₽".to_string(), OrderStatus::Confirmed, 14,
        ),
        Order::new(
            "ORD-2026-013".to_string(), "Severny".to_string(), "Concept Nord".to_string(),
            "2026-07-02".to_string(), "840 000 ₽".to_string(), OrderStatus::Shipped, 9,
        ),
        Order::new(
            "ORD-2026-012".to_string(), "KRAI".to_string(), "Галерея 7".to_string(),
            "2026-06-21".to_string(), "310 000 ₽".to_string(), OrderStatus::Completed, 5,
        ),
        Order::new(
            "ORD-2026-011".to_string(), "Dom Vetra".to_string(), "ЦУМ Байинг".to_string(),
            "2026-06-18".to_string(), "2 050 000 ₽".to_string(), OrderStatus::Confirmed, 18,
        ),
        Order::new(
            "ORD-2026-010".to_string(), "Aurora Atelier".to_string(), "Modnaya Lavka".to_string(),
            "2026-06-05".to_string(), "560 000 ₽".to_string(), OrderStatus::Completed, 7,
        ),
        Order::new(
            "ORD-2026-009".to_string(), "Lumen Studio".to_string(), "Concept Nord".to_string(),
            "2026-05-28".to_string(), "420 000 ₽".to_string(), OrderStatus::Cancelled, 6,
        ),
        Order::new(
            "ORD-2026-008".to_string(), "Severny".to_string(), "Галерея 7".to_string(),
            "2026-05-16".to_string(), "690 000 ₽".to_string(), OrderStatus::Completed, 8,
        ),
        Order::new(
            "ORD-2026-007".to_string(), "Atelier 9".to_string(), "Modnaya Lavka".to_string(),
            "2026-05-03".to_string(), "275 000 ₽".to_string(), OrderStatus::Draft, 4,
        ),
        Order::new(
            "ORD-2026-006".to_string(), "Dom Vetra".to_string(), "Boutique Lina".to_string(),
            "2026-04-22".to_string(), "380 000 ₽".to_string(), OrderStatus::Completed, 5,
        ),
        Order::new(
            "ORD-2026-005".to_string(), "KRAI".to_string(), "ЦУМ Байинг".to_string(),
            "2026-04-10".to_string(), "945 000 ₽".to_string(), OrderStatus::Shipped, 11,
        ),
    ];

    for o in &orders {
        if let Err(e) = o.validate() {
            log::warn!("seed: заказ '{}' невалиден: {}", o.base.code, e);
        }
    }
    orders
}

/// События шоурума
pub fn seed_events() -> Vec<ShowroomEvent> {
    let events = vec![
        ShowroomEvent::new(
            "EVT-001".to_string(), "Показ SS26: новые имена".to_string(),
            "2026-09-03".to_string(), "Москва".to_string(), "Шоурум на Полянке".to_string(),
            "Показ".to_string(), EventStatus::RegistrationOpen,
        ),
        ShowroomEvent::new(
            "EVT-002".to_string(), "Байерский день: трикотаж".to_string(),
            "2026-09-17".to_string(), "Москва".to_string(), "Шоурум на Полянке".to_string(),
            "Байерский день".to_string(), EventStatus::Planned,
        ),
        ShowroomEvent::new(
            "EVT-003".to_string(), "Презентация Dom Vetra".to_string(),
            "2026-08-21".to_string(), "Санкт-Петербург".to_string(), "Лофт «Север»".to_string(),
            "Презентация".to_string(), EventStatus::RegistrationOpen,
        ),
        ShowroomEvent::new(
            "EVT-004".to_string(), "Итоги сезона FW25".to_string(),
            "2026-04-09".to_string(), "Москва".to_string(), "Шоурум на Полянке".to_string(),
            "Презентация".to_string(), EventStatus::Finished,
        ),
        ShowroomEvent::new(
            "EVT-005".to_string(), "Показ вечерней капсулы".to_string(),
            "2026-10-01".to_string(), "Милан".to_string(), "Spazio Undici".to_string(),
            "Показ".to_string(), EventStatus::Planned,
        ),
    ];

    for e in &events {
        if let Err(err) = e.validate() {
            log::warn!("seed: событие '{}' невалидно: {}", e.base.description, err);
        }
    }
    events
}

/// Истории брендов
pub fn seed_stories() -> Vec<Story> {
    let stories = vec![
        Story::new(
            "STY-001".to_string(), "Как Aurora Atelier шьёт шёлк в Москве".to_string(),
            "Aurora Atelier".to_string(), "2026-07-20".to_string(), StoryStatus::Published,
        ),
        Story::new(
            "STY-002".to_string(), "Severny: пуховики для северных городов".to_string(),
            "Severny".to_string(), "2026-07-06".to_string(), StoryStatus::Published,
        ),
        Story::new(
            "STY-003".to_string(), "KRAI о переработанном кашемире".to_string(),
            "KRAI".to_string(), String::new(), StoryStatus::Draft,
        ),
        Story::new(
            "STY-004".to_string(), "Dom Vetra: миланская мастерская".to_string(),
            "Dom Vetra".to_string(), "2026-05-30".to_string(), StoryStatus::Published,
        ),
        Story::new(
            "STY-005".to_string(), "Первая коллекция Lumen Studio".to_string(),
            "Lumen Studio".to_string(), "2026-03-12".to_string(), StoryStatus::Archived,
        ),
    ];

    for s in &stories {
        if let Err(e) = s.validate() {
            log::warn!("seed: история '{}' невалидна: {}", s.base.description, e);
        }
    }
    stories
}
