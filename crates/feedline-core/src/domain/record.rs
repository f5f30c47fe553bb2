use chrono::{Local, NaiveDateTime, SubsecRound};

/// A storable entity whose identity is assigned by the store.
///
/// Repositories call the lifecycle hooks from `save`: `on_create` before the
/// first insert, `on_update` before every overwrite.
pub trait Record: Clone + Send + Sync {
    type Id: Copy + Send + Sync;

    /// The stored identity, or `None` while the entity is transient.
    fn id(&self) -> Option<Self::Id>;

    /// A transient entity has not been stored yet.
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }

    fn on_create(&mut self, now: NaiveDateTime);

    fn on_update(&mut self, now: NaiveDateTime);
}

/// Current local time at the precision PostgreSQL `TIMESTAMP` keeps.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}
