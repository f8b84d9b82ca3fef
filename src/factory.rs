use alloc::boxed::Box;

/// Error produced by a [`Factory`] that could not create an object.
pub type FactoryError = Box<dyn core::error::Error + Send + Sync>;

/// A trait defining how a pool creates new objects.
///
/// The pool calls [`Factory::create`] once per object it ever holds: during
/// warm-up, and again whenever a spawn finds no idle object to reuse. Every
/// call must return a fresh, independent object.
pub trait Factory<T> {
    /// Creates a new object of type T.
    ///
    /// A failure is fatal to the warm-up or spawn that asked for the object;
    /// the pool does not retry.
    fn create(&mut self) -> Result<T, FactoryError>;
}

impl<T, F> Factory<T> for F
where
    F: FnMut() -> Result<T, FactoryError>,
{
    #[inline(always)]
    fn create(&mut self) -> Result<T, FactoryError> {
        self()
    }
}

/// A factory that clones a template object.
///
/// This is the usual way to pool scene nodes: configure one prototype
/// (texture, mesh, collider) and let the pool stamp out copies of it.
#[derive(Debug, Clone)]
pub struct CloneFactory<T> {
    template: T,
}

impl<T: Clone> CloneFactory<T> {
    /// Creates a factory that produces clones of `template`.
    pub fn new(template: T) -> Self {
        CloneFactory { template }
    }

    /// Borrows the template every new object is cloned from.
    pub fn template(&self) -> &T {
        &self.template
    }
}

impl<T: Clone> Factory<T> for CloneFactory<T> {
    #[inline(always)]
    fn create(&mut self) -> Result<T, FactoryError> {
        Ok(self.template.clone())
    }
}
