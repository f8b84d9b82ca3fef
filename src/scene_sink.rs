/// A trait defining how pooled objects join and leave the host scene graph.
///
/// The pool never inspects the objects it holds. Everything it needs from
/// the host is expressed here.
pub trait SceneSink<T> {
    /// Registers a newly created object with the scene graph.
    ///
    /// Called exactly once per object, right after the factory created it and
    /// before any [`Self::set_active`] call.
    fn attach(&mut self, obj: &mut T);

    /// Toggles whether the object is visible and takes part in updates.
    ///
    /// Must be idempotent and must not destroy or reallocate the object.
    fn set_active(&mut self, obj: &mut T, active: bool);
}

/// A sink for pools that are not backed by a scene graph.
impl<T> SceneSink<T> for () {
    #[inline(always)]
    fn attach(&mut self, _obj: &mut T) {}

    #[inline(always)]
    fn set_active(&mut self, _obj: &mut T, _active: bool) {}
}
