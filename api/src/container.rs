//! Dependency container
//!
//! Builds the repository → service → controller graph once at startup.

use std::sync::Arc;

use crate::adapters::PostgresAnimalRepository;
use crate::app::{AnimalService, AnimalUseCase};
use crate::domain::ports::ConnectionPool;
use crate::handlers::{CatController, DogController};

/// Controllers wired around a single shared animal service
#[derive(Clone)]
pub struct DependencyContainer {
    pub dog_ctl: Arc<DogController>,
    pub cat_ctl: Arc<CatController>,
}

impl DependencyContainer {
    /// Wire the full graph on top of a connection pool
    pub fn new<P>(pool: Arc<P>) -> Self
    where
        P: ConnectionPool + ?Sized + 'static,
    {
        let animal_repo = Arc::new(PostgresAnimalRepository::new(pool));
        let animal_service: Arc<dyn AnimalUseCase> = Arc::new(AnimalService::new(animal_repo));

        Self::with_service(animal_service)
    }

    /// Wire the controllers around an already built service
    pub fn with_service(service: Arc<dyn AnimalUseCase>) -> Self {
        Self {
            dog_ctl: Arc::new(DogController::new(service.clone())),
            cat_ctl: Arc::new(CatController::new(service)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DetachedPool;
    use crate::test_utils::MockAnimalService;

    #[test]
    fn controllers_share_one_service() {
        let container = DependencyContainer::new(Arc::new(DetachedPool));

        assert!(Arc::ptr_eq(
            container.dog_ctl.service(),
            container.cat_ctl.service()
        ));
    }

    #[test]
    fn with_service_uses_given_instance() {
        let service: Arc<dyn AnimalUseCase> = Arc::new(MockAnimalService::returning("x"));

        let container = DependencyContainer::with_service(service.clone());

        assert!(Arc::ptr_eq(container.dog_ctl.service(), &service));
        assert!(Arc::ptr_eq(container.cat_ctl.service(), &service));
    }

    #[test]
    fn clones_share_controllers() {
        let container = DependencyContainer::new(Arc::new(DetachedPool));
        let cloned = container.clone();

        assert!(Arc::ptr_eq(&container.dog_ctl, &cloned.dog_ctl));
        assert!(Arc::ptr_eq(&container.cat_ctl, &cloned.cat_ctl));
    }

    #[tokio::test]
    async fn detached_graph_answers_with_zero_wait() {
        let container = DependencyContainer::new(Arc::new(DetachedPool));

        let dog = container.dog_ctl.do_something("dog").await.unwrap();
        let cat = container.cat_ctl.do_something("cat").await.unwrap();

        assert_eq!(dog, "0.000000");
        assert_eq!(cat, "0.000000");
    }
}
