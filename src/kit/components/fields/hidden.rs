// Hidden input for FormCraft

use crate::component::{Component, ComponentError, Context, Node};

/// Hidden input props
#[derive(Debug, Clone, Default)]
pub struct HiddenProps {
    pub name: String,
    pub value: String,
}

/// Value submitted with the form without being shown
#[derive(Debug)]
pub struct Hidden {
    props: HiddenProps,
}

impl Hidden {
    pub fn value(&self) -> &str {
        &self.props.value
    }
}

impl Component for Hidden {
    type Props = HiddenProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![Node::element("input")
            .attr("type", "hidden")
            .attr("name", &self.props.name)
            .attr("value", &self.props.value)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;

    #[test]
    fn test_renders_name_and_value() {
        let mut hidden = Hidden::create(
            HiddenProps {
                name: "post_id".to_string(),
                value: "42".to_string(),
            },
            Context::new(),
        );
        assert_eq!(hidden.value(), "42");

        let tree = root(hidden.render().unwrap());
        let inputs = tree.find_by_tag("input");
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].attribute("type"), Some("hidden"));
        assert_eq!(inputs[0].attribute("name"), Some("post_id"));
        assert_eq!(inputs[0].attribute("value"), Some("42"));

        hidden
            .update(HiddenProps {
                name: "post_id".to_string(),
                value: "43".to_string(),
            })
            .unwrap();
        let tree = root(hidden.render().unwrap());
        assert_eq!(tree.find_by_tag("input")[0].attribute("value"), Some("43"));
    }
}
