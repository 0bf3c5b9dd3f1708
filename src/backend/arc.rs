use crate::backend::DatabaseBackend;
use crate::Location;
use std::sync::Arc;

impl<Backend> DatabaseBackend for Arc<Backend>
where
    Backend: DatabaseBackend,
{
    type Error = Backend::Error;

    fn at_location(location: Location) -> Result<Self, Self::Error> {
        Backend::at_location(location).map(Self::new)
    }

    fn location(&self) -> &Location {
        self.as_ref().location()
    }
}
