use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::Availability;
use crate::shared::listing::{parse_amount, Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара коллекции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар коллекции бренда (позиция каталога байера)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Категория ("Платья", "Верхняя одежда", ...)
    pub category: String,

    /// Подкатегория в рамках категории
    #[serde(rename = "subCategory")]
    pub sub_category: String,

    /// Оптовая цена за партию, с валютой ("170 000 ₽")
    pub price: String,

    /// Основной материал
    pub material: String,

    /// Доступность
    pub availability: Availability,

    /// Сезон коллекции ("SS26", "FW25")
    pub season: String,

    /// Базовый цвет
    pub color: String,

    /// Размерная сетка ("XS–L")
    #[serde(rename = "sizeRange")]
    pub size_range: String,

    /// Название бренда
    #[serde(rename = "brandName")]
    pub brand_name: String,

    /// Сертификаты устойчивости (GOTS, OEKO-TEX, ...)
    pub certificates: Vec<String>,

    /// Минимальная партия, с единицей ("10 шт")
    #[serde(rename = "minimumOrder")]
    pub minimum_order: String,

    /// Срок производства ("2–4 недели")
    #[serde(rename = "leadTime")]
    pub lead_time: String,

    /// Откуда отгрузка ("Москва", "Милан")
    #[serde(rename = "shippingFrom")]
    pub shipping_from: String,

    /// Эксклюзив для платформы
    #[serde(rename = "isExclusive")]
    pub is_exclusive: bool,

    /// Отметка байера «избранное» — чистая декорация, на фильтрацию
    /// не влияет
    pub favorite: bool,
}

impl Product {
    /// Создать новый товар
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        category: String,
        sub_category: String,
        price: String,
        material: String,
        availability: Availability,
        season: String,
        color: String,
        size_range: String,
        brand_name: String,
        certificates: Vec<String>,
        minimum_order: String,
        lead_time: String,
        shipping_from: String,
        is_exclusive: bool,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), code, name),
            category,
            sub_category,
            price,
            material,
            availability,
            season,
            color,
            size_range,
            brand_name,
            certificates,
            minimum_order,
            lead_time,
            shipping_from,
            is_exclusive,
            favorite: false,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Переключить отметку «избранное»
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.category.trim().is_empty() {
            return Err("Категория не может быть пустой".into());
        }
        if parse_amount(&self.price).is_none() {
            return Err(format!("Цена не разбирается: '{}'", self.price));
        }
        if self.brand_name.trim().is_empty() {
            return Err("Бренд не может быть пустым".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Каталог"
    }
}

// ============================================================================
// Listing
// ============================================================================

impl ListRecord for Product {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.description.clone(),
            self.category.clone(),
            self.sub_category.clone(),
            self.brand_name.clone(),
        ]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Category => vec![self.category.clone()],
            Facet::SubCategory => vec![self.sub_category.clone()],
            Facet::Material => vec![self.material.clone()],
            Facet::Season => vec![self.season.clone()],
            Facet::Color => vec![self.color.clone()],
            Facet::Size => vec![self.size_range.clone()],
            Facet::Brand => vec![self.brand_name.clone()],
            Facet::Certification => self.certificates.clone(),
            Facet::LeadTime => vec![self.lead_time.clone()],
            Facet::ShippingOrigin => vec![self.shipping_from.clone()],
            Facet::Status | Facet::Plan => Vec::new(),
        }
    }

    fn range_value(&self, field: RangeField) -> Option<f64> {
        match field {
            RangeField::Price => parse_amount(&self.price),
            RangeField::MinimumOrder => parse_amount(&self.minimum_order),
        }
    }

    fn toggle_value(&self, toggle: ToggleField) -> bool {
        match toggle {
            ToggleField::InStock => self.availability == Availability::InStock,
            ToggleField::ExclusiveOnly => self.is_exclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            "PRD-001".to_string(),
            "Платье-комбинация".to_string(),
            "Платья".to_string(),
            "Вечерние".to_string(),
            "170 000 ₽".to_string(),
            "Шёлк".to_string(),
            Availability::InStock,
            "SS26".to_string(),
            "Чёрный".to_string(),
            "XS–L".to_string(),
            "Aurora Atelier".to_string(),
            vec!["GOTS".to_string()],
            "10 шт".to_string(),
            "2–4 недели".to_string(),
            "Москва".to_string(),
            false,
        )
    }

    #[test]
    fn test_listing_accessors() {
        let product = sample();
        assert_eq!(product.facet_terms(Facet::Category), vec!["Платья"]);
        assert_eq!(product.facet_terms(Facet::Certification), vec!["GOTS"]);
        assert!(product.facet_terms(Facet::Status).is_empty());
        assert_eq!(product.range_value(RangeField::Price), Some(170_000.0));
        assert_eq!(product.range_value(RangeField::MinimumOrder), Some(10.0));
        assert!(product.toggle_value(ToggleField::InStock));
        assert!(!product.toggle_value(ToggleField::ExclusiveOnly));
    }

    #[test]
    fn test_validate() {
        let mut product = sample();
        assert!(product.validate().is_ok());
        product.price = "по запросу".to_string();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut product = sample();
        assert!(!product.favorite);
        product.toggle_favorite();
        assert!(product.favorite);
        product.toggle_favorite();
        assert!(!product.favorite);
    }
}
