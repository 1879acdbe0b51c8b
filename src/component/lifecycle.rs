//! Component lifecycle management

use crate::component::{Component, ComponentError, Context, LifecyclePhase, Node};

/// Owns a component instance and enforces the create → mount → update → unmount order
pub struct LifecycleManager<C: Component> {
    /// Current phase of the component
    phase: LifecyclePhase,

    /// Component instance being managed
    component: C,
}

impl<C: Component> LifecycleManager<C> {
    /// Create the component from props
    pub fn new(props: C::Props, context: Context) -> Self
    where
        C: Sized,
    {
        Self {
            phase: LifecyclePhase::Created,
            component: C::create(props, context),
        }
    }

    /// Create and immediately mount the component
    pub fn mounted(props: C::Props, context: Context) -> Result<Self, ComponentError>
    where
        C: Sized,
    {
        let mut manager = Self::new(props, context);
        manager.mount()?;
        Ok(manager)
    }

    /// Get the current lifecycle phase
    pub fn current_phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Borrow the component
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Borrow the component mutably (for event handlers)
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Mount the component to the tree
    pub fn mount(&mut self) -> Result<(), ComponentError> {
        if self.phase != LifecyclePhase::Created {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                "mount".to_string(),
            ));
        }

        self.component.mount()?;
        self.phase = LifecyclePhase::Mounted;
        Ok(())
    }

    /// Update the component with new props
    pub fn update(&mut self, props: C::Props) -> Result<(), ComponentError> {
        if self.phase != LifecyclePhase::Mounted {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                "update".to_string(),
            ));
        }

        self.component.update(props)
    }

    /// Render the component
    pub fn render(&self) -> Result<Vec<Node>, ComponentError> {
        if self.phase == LifecyclePhase::Unmounted {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                "render".to_string(),
            ));
        }

        self.component.render()
    }

    /// Unmount the component from the tree
    pub fn unmount(&mut self) -> Result<(), ComponentError> {
        if self.phase != LifecyclePhase::Mounted {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                "unmount".to_string(),
            ));
        }

        self.component.unmount()?;
        self.phase = LifecyclePhase::Unmounted;
        Ok(())
    }
}
