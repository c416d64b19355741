use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ========================================================================
    // Методы экземпляра (данные конкретной записи)
    // ========================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "ORD-2026-014")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Метаданные класса агрегата (статические данные)
    // ========================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "brand")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Бренд")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Бренды")
    fn list_name() -> &'static str;

    // ========================================================================
    // Методы с реализацией по умолчанию
    // ========================================================================

    /// Полное имя агрегата для системы (например, "a001_brand")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
