use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // creates an entity, replacing any existing entity with the same id
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // updates an existing entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity, returns number of removed entities
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // iterate over all entities
    fn iter(&self) -> Box<dyn Iterator<Item = &Entity> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
