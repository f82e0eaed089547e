use core::any::Any;

use crate::field::FieldMut;
use crate::schema::Schema;

/// A struct whose fields can be addressed through its schema table.
///
/// Normally implemented by `#[derive(Section)]`, which also requires the
/// struct to implement `Clone` (default propagation) and `Default` (lazily
/// created sections). The same trait serves the root configuration type and
/// every section struct.
pub trait Section: Any {
    /// Schema table of the implementing type.
    fn describe() -> &'static Schema
    where
        Self: Sized;

    fn schema(&self) -> &'static Schema;

    /// Handle to the field at `index` in [`Schema::fields`].
    fn field_at(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Deep copy of `self`, used as the starting value of new subsections.
    fn clone_boxed(&self) -> Box<dyn Any>;
}
