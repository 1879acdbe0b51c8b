//! Tests for component lifecycle management

use crate::component::{
    Component, ComponentError, ComponentId, Context, LifecycleManager, LifecyclePhase, Node,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// A simple test component with props
#[derive(Debug)]
struct TestComponent {
    props: TestProps,
    state: Arc<TestComponentState>,
}

#[derive(Debug, Default)]
struct TestComponentState {
    mount_called: AtomicBool,
    unmount_called: AtomicBool,
}

#[derive(Debug, Clone)]
struct TestProps {
    message: String,
    state: Arc<TestComponentState>,
}

impl Component for TestComponent {
    type Props = TestProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self {
            state: props.state.clone(),
            props,
        }
    }

    fn mount(&mut self) -> Result<(), ComponentError> {
        self.state.mount_called.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        if props.message.is_empty() {
            return Err(ComponentError::invalid_prop("message", "must not be empty"));
        }
        self.props = props;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        self.state.unmount_called.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![Node::element("p").child(Node::text(self.props.message.clone()))])
    }
}

fn props(message: &str, state: &Arc<TestComponentState>) -> TestProps {
    TestProps {
        message: message.to_string(),
        state: state.clone(),
    }
}

#[test]
fn test_component_lifecycle() {
    let state = Arc::new(TestComponentState::default());
    let mut manager =
        LifecycleManager::<TestComponent>::new(props("Hello", &state), Context::new());
    assert_eq!(manager.current_phase(), LifecyclePhase::Created);

    manager.mount().expect("mount should succeed");
    assert!(state.mount_called.load(Ordering::SeqCst));
    assert_eq!(manager.current_phase(), LifecyclePhase::Mounted);

    manager
        .update(props("Updated", &state))
        .expect("update should succeed");
    let nodes = manager.render().unwrap();
    assert_eq!(nodes[0].text_content(), "Updated");

    manager.unmount().expect("unmount should succeed");
    assert!(state.unmount_called.load(Ordering::SeqCst));
    assert_eq!(manager.current_phase(), LifecyclePhase::Unmounted);
}

#[test]
fn test_invalid_transitions() {
    let state = Arc::new(TestComponentState::default());
    let mut manager =
        LifecycleManager::<TestComponent>::new(props("Hello", &state), Context::new());

    assert!(matches!(
        manager.update(props("Early", &state)),
        Err(ComponentError::InvalidLifecycleTransition(LifecyclePhase::Created, _))
    ));
    assert!(manager.unmount().is_err());

    manager.mount().unwrap();
    assert!(manager.mount().is_err());

    manager.unmount().unwrap();
    assert!(manager.render().is_err());
}

#[test]
fn test_update_error_propagates() {
    let state = Arc::new(TestComponentState::default());
    let mut manager =
        LifecycleManager::<TestComponent>::mounted(props("Hello", &state), Context::new()).unwrap();

    let err = manager.update(props("", &state)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value for property message: must not be empty"
    );
    assert_eq!(manager.component().props.message, "Hello");
}

#[test]
fn test_component_ids_are_unique() {
    let context = Context::new().with_id_prefix("demo");
    let a = ComponentId::new();
    let b = ComponentId::new();
    assert_ne!(a, b);
    assert_eq!(context.element_id(a), format!("demo-{}", a.value()));
}

#[test]
fn test_child_context_shares_services() {
    let parent = Context::new();
    parent.storage().set_item("k", "v").unwrap();
    parent.provider().provide(String::from("shared")).unwrap();

    let child = Context::with_parent(&parent);
    assert_eq!(child.storage().get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(child.provider().consume::<String>().as_deref(), Some("shared"));
}
