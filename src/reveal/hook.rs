use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{self, RevealNode, SharedReveal, REVEALED_CLASS};
use super::{RevealOptions, RevealTarget};

/// Transition-delay bucket for staggered reveals. Pure presentation: the
/// controller never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stagger {
    One,
    Two,
    Three,
    Four,
}

impl Stagger {
    pub fn class(self) -> &'static str {
        match self {
            Stagger::One => "animate-delay-1",
            Stagger::Two => "animate-delay-2",
            Stagger::Three => "animate-delay-3",
            Stagger::Four => "animate-delay-4",
        }
    }
}

impl TryFrom<u8> for Stagger {
    type Error = u8;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        match step {
            1 => Ok(Stagger::One),
            2 => Ok(Stagger::Two),
            3 => Ok(Stagger::Three),
            4 => Ok(Stagger::Four),
            other => Err(other),
        }
    }
}

#[derive(Default)]
struct RegistryState {
    pending: Vec<RevealTarget<RevealNode>>,
    controller: Option<SharedReveal>,
}

/// The explicit list of reveal targets on a page. `<Reveal>` elements add
/// themselves when they mount; the page hands the collected list to one
/// controller in a single batch.
#[derive(Clone, Default)]
pub struct RevealRegistry {
    inner: Rc<RefCell<RegistryState>>,
}

impl PartialEq for RevealRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RevealRegistry {
    pub fn register(&self, target: RevealTarget<RevealNode>) {
        let mut guard = self.inner.borrow_mut();
        let state = &mut *guard;
        match &state.controller {
            Some(controller) => {
                controller.borrow_mut().attach(std::iter::once(target));
            }
            None => state.pending.push(target),
        }
    }

    pub fn release(&self, node: &RevealNode) {
        let mut guard = self.inner.borrow_mut();
        let state = &mut *guard;
        state.pending.retain(|t| &t.element != node);
        if let Some(controller) = &state.controller {
            controller.borrow_mut().release(node);
        }
    }

    /// Whether the controller has put `node` into its final state.
    pub fn is_revealed(&self, node: &RevealNode) -> bool {
        let state = self.inner.borrow();
        state
            .controller
            .as_ref()
            .and_then(|controller| controller.try_borrow().ok().map(|c| c.is_revealed(node)))
            .unwrap_or(false)
    }

    fn activate(&self, controller: SharedReveal) {
        let mut state = self.inner.borrow_mut();
        let pending = std::mem::take(&mut state.pending);
        controller.borrow_mut().attach(pending);
        state.controller = Some(controller);
    }

    fn deactivate(&self) {
        let controller = self.inner.borrow_mut().controller.take();
        if let Some(controller) = controller {
            let mut controller = controller.borrow_mut();
            if !controller.is_detached() {
                debug!("reveal: detaching with {} targets never shown", controller.pending());
                controller.detach();
            }
        }
    }
}

/// Owns the page's reveal controller: created once on mount, attached to
/// everything registered so far, detached on unmount.
#[hook]
pub fn use_reveal() -> RevealRegistry {
    let registry = use_memo(|_| RevealRegistry::default(), ());
    {
        let registry = (*registry).clone();
        use_effect_with_deps(
            move |_| {
                registry.activate(dom::start(&RevealOptions::default()));
                move || registry.deactivate()
            },
            (),
        );
    }
    (*registry).clone()
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub stagger: Option<Stagger>,
    /// Shown in its final state from the first paint.
    #[prop_or_default]
    pub pre_revealed: bool,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let registry = use_context::<RevealRegistry>();

    {
        let node = node.clone();
        let registry = registry.clone();
        let pre_revealed = props.pre_revealed;
        use_effect_with_deps(
            move |_| {
                let element = node.cast::<Element>().map(RevealNode);
                if let (Some(registry), Some(element)) = (&registry, &element) {
                    let target = if pre_revealed || element.is_marked_revealed() {
                        RevealTarget::pre_revealed(element.clone())
                    } else {
                        RevealTarget::hidden(element.clone())
                    };
                    registry.register(target);
                }
                move || {
                    if let (Some(registry), Some(element)) = (registry, element) {
                        registry.release(&element);
                    }
                }
            },
            (),
        );
    }

    // Outside a registry nobody would ever reveal the element. On re-render
    // the class the controller added must survive the diff.
    let revealed = match (&registry, node.cast::<Element>()) {
        (Some(registry), Some(element)) => registry.is_revealed(&RevealNode(element)),
        _ => false,
    };
    let shown = props.pre_revealed || registry.is_none() || revealed;
    let class = classes!(
        "animate-on-scroll",
        props.stagger.map(Stagger::class),
        shown.then_some(REVEALED_CLASS),
        props.class.clone(),
    );

    html! {
        <@{props.tag.to_string()} ref={node} class={class}>
            { for props.children.iter() }
        </@>
    }
}
