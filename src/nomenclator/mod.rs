use std::{cell::RefCell, rc::Rc};

use crate::{
    configatron::BemOptions,
    derivatron::derive_class_list,
    identity::SharedIdentity,
    memorion::Memorion,
    types::{BemValue, MixMap, ModifierMap},
    utils::{join_class_list::join_class_list, overlay_map::overlay_map},
};

/// Element name used when a call does not name one.
pub const DEFAULT_ELEMENT_NAME: &str = "elem";

type BlockDependencies = (String, String, Rc<ModifierMap>, Rc<MixMap>);

/// Per-call extras for a block class name.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BlockCall {
    pub additional_mods: Option<ModifierMap>,
    pub additional_mix: Option<MixMap>,
}

impl BlockCall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mod<V: Into<BemValue>>(mut self, key: &str, value: V) -> Self {
        self.additional_mods
            .get_or_insert_with(ModifierMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn with_mix<V: Into<BemValue>>(mut self, key: &str, value: V) -> Self {
        self.additional_mix
            .get_or_insert_with(MixMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.additional_mods.as_ref().map_or(true, |m| m.is_empty())
            && self.additional_mix.as_ref().map_or(true, |m| m.is_empty())
    }
}

/// Per-call arguments for an element class name.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ElementCall {
    pub elem: Option<String>,
    pub additional_mods: Option<ModifierMap>,
    pub additional_mix: Option<MixMap>,
}

impl ElementCall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elem(elem: &str) -> Self {
        Self {
            elem: Some(elem.to_string()),
            ..Self::default()
        }
    }

    pub fn with_mod<V: Into<BemValue>>(mut self, key: &str, value: V) -> Self {
        self.additional_mods
            .get_or_insert_with(ModifierMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn with_mix<V: Into<BemValue>>(mut self, key: &str, value: V) -> Self {
        self.additional_mix
            .get_or_insert_with(MixMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// Resolves the name currently held by the component, falling back to the captured display name.
fn current_name(component: &SharedIdentity, display_name: &str) -> String {
    match component.borrow().get_display_name() {
        Some(name) if !name.is_empty() => name,
        _ => display_name.to_string(),
    }
}

/// Block-level accessor produced by `Nomenclator::render`.
#[derive(Debug)]
pub struct BlockNamer {
    component: SharedIdentity,
    class_name: String,
    display_name: String,
    mods: Rc<ModifierMap>,
    mix: Rc<MixMap>,
    /// Last class name produced for a call without extras, keyed by the identity name it used.
    plain: RefCell<Option<(String, Rc<str>)>>,
}

impl BlockNamer {
    fn new(
        component: SharedIdentity,
        class_name: String,
        display_name: String,
        mods: Rc<ModifierMap>,
        mix: Rc<MixMap>,
    ) -> Self {
        tracing::debug!(
            "Creating block namer for '{}' with class_name '{}'",
            display_name,
            class_name
        );

        Self {
            component,
            class_name,
            display_name,
            mods,
            mix,
            plain: RefCell::new(None),
        }
    }

    /// Builds the block class name.
    ///
    /// The call's extra modifiers and mixes are overlaid on fresh copies of the captured
    /// base maps; the base maps are never modified, so extras do not leak into later calls.
    pub fn get_block_class_name(&self, call: &BlockCall) -> Rc<str> {
        let name = current_name(&self.component, &self.display_name);

        if call.is_empty() {
            if let Some((cached_name, class_name)) = self.plain.borrow().as_ref() {
                if cached_name == &name {
                    return Rc::clone(class_name);
                }
            }
        }

        let mods = overlay_map(&self.mods, call.additional_mods.as_ref());
        let mix = overlay_map(&self.mix, call.additional_mix.as_ref());

        let class_list = derive_class_list(&name, Some(&self.class_name), Some(&mods), Some(&mix));
        let class_name: Rc<str> = Rc::from(join_class_list(&class_list));

        if call.is_empty() {
            *self.plain.borrow_mut() = Some((name, Rc::clone(&class_name)));
        }

        class_name
    }
}

/// Element-level accessor produced by `Nomenclator::render`.
#[derive(Debug)]
pub struct ElementNamer {
    component: SharedIdentity,
    display_name: String,
}

impl ElementNamer {
    fn new(component: SharedIdentity, display_name: String) -> Self {
        tracing::debug!("Creating element namer for '{}'", display_name);

        Self {
            component,
            display_name,
        }
    }

    /// Builds `{name}__{elem}` followed by the call's own modifiers and mixes.
    ///
    /// The block's base modifiers and mixes are not applied to elements.
    pub fn get_element_class_name(&self, call: &ElementCall) -> String {
        let name = current_name(&self.component, &self.display_name);
        let elem = call.elem.as_deref().unwrap_or(DEFAULT_ELEMENT_NAME);
        let element_name = format!("{}__{}", name, elem);

        let class_list = derive_class_list(
            &element_name,
            None,
            call.additional_mods.as_ref(),
            call.additional_mix.as_ref(),
        );

        join_class_list(&class_list)
    }
}

/// The pair of accessors handed to a component on each render.
#[derive(Clone, Debug)]
pub struct BemNotation {
    pub block: Rc<BlockNamer>,
    pub element: Rc<ElementNamer>,
}

impl BemNotation {
    pub fn get_block_class_name(&self, call: &BlockCall) -> Rc<str> {
        self.block.get_block_class_name(call)
    }

    pub fn get_element_class_name(&self, call: &ElementCall) -> String {
        self.element.get_element_class_name(call)
    }
}

/// BEM naming facade bound to one component.
///
/// The host calls `render` on every update of the component. Each accessor is rebuilt
/// only when its own dependencies change: the block accessor tracks the class name,
/// display name and the identity of the base maps; the element accessor tracks the
/// display name only.
#[derive(Debug)]
pub struct Nomenclator {
    component: SharedIdentity,
    block_memo: Memorion<BlockDependencies, BlockNamer>,
    element_memo: Memorion<String, ElementNamer>,
}

impl Nomenclator {
    pub fn new(component: SharedIdentity) -> Self {
        Self {
            component,
            block_memo: Memorion::new(),
            element_memo: Memorion::new(),
        }
    }

    /// One-shot form: binds a facade to `component` and returns its first accessors.
    pub fn initialize(
        component: SharedIdentity,
        options: &BemOptions,
        display_name: &str,
    ) -> BemNotation {
        Self::new(component).render(options, display_name)
    }

    /// Returns the accessors for the current render.
    ///
    /// Assigns `display_name` to the component first if its slot is empty.
    pub fn render(&self, options: &BemOptions, display_name: &str) -> BemNotation {
        self.component
            .borrow_mut()
            .ensure_display_name(display_name);

        let block_deps: BlockDependencies = (
            options.get_class_name(),
            display_name.to_string(),
            options.get_mods(),
            options.get_mix(),
        );

        let block = self.block_memo.get_or_compute(block_deps, || {
            BlockNamer::new(
                Rc::clone(&self.component),
                options.get_class_name(),
                display_name.to_string(),
                options.get_mods(),
                options.get_mix(),
            )
        });

        let element = self
            .element_memo
            .get_or_compute(display_name.to_string(), || {
                ElementNamer::new(Rc::clone(&self.component), display_name.to_string())
            });

        BemNotation { block, element }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use indexmap::IndexMap;

    use crate::{
        configatron::{BemOptions, DEFAULT_DISPLAY_NAME},
        identity::ComponentIdentity,
        nomenclator::{BlockCall, ElementCall, Nomenclator},
        types::{BemValue, ModifierMap},
    };

    fn mods_of(entries: Vec<(&str, BemValue)>) -> ModifierMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_initialize_assigns_display_name_once() {
        let component = ComponentIdentity::new().shared();

        Nomenclator::initialize(
            Rc::clone(&component),
            &BemOptions::default(),
            DEFAULT_DISPLAY_NAME,
        );
        assert_eq!(
            component.borrow().get_display_name(),
            Some("Component".to_string())
        );

        Nomenclator::initialize(Rc::clone(&component), &BemOptions::default(), "Button");
        assert_eq!(
            component.borrow().get_display_name(),
            Some("Component".to_string())
        );
    }

    #[test]
    fn test_block_class_name_starts_with_identity_then_literal() {
        let component = ComponentIdentity::with_display_name("Button").shared();
        let options = BemOptions::new(
            "extra",
            mods_of(vec![("disabled", BemValue::from(true))]),
            mods_of(vec![("theme", BemValue::from("dark mode"))]),
        );

        let notation = Nomenclator::initialize(component, &options, "Fallback");

        assert_eq!(
            &*notation.get_block_class_name(&BlockCall::new()),
            "Button extra Button_disabled theme_dark-mode"
        );
    }

    #[test]
    fn test_block_extras_overlay_without_accumulating() {
        let component = ComponentIdentity::with_display_name("Button").shared();
        let options = BemOptions::new(
            "",
            mods_of(vec![("size", BemValue::from("small"))]),
            IndexMap::new(),
        );
        let notation = Nomenclator::initialize(component, &options, "Button");

        let first = notation.get_block_class_name(
            &BlockCall::new()
                .with_mod("size", "large")
                .with_mod("active", true),
        );
        assert_eq!(&*first, "Button Button_size_large Button_active");

        let second = notation.get_block_class_name(&BlockCall::new().with_mix("row", 2));
        assert_eq!(&*second, "Button Button_size_small row_2");

        assert_eq!(options.get_mods().len(), 1);
        assert_eq!(options.get_mods()["size"], BemValue::from("small"));
    }

    #[test]
    fn test_plain_block_calls_return_same_instance() {
        let component = ComponentIdentity::with_display_name("Button").shared();
        let notation = Nomenclator::initialize(component, &BemOptions::default(), "Button");

        let first = notation.get_block_class_name(&BlockCall::new());
        let second = notation.get_block_class_name(&BlockCall::default());

        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_plain_block_cache_follows_identity_changes() {
        let component = ComponentIdentity::with_display_name("Button").shared();
        let notation = Nomenclator::initialize(
            Rc::clone(&component),
            &BemOptions::default(),
            "Button",
        );

        let before = notation.get_block_class_name(&BlockCall::new());
        component.borrow_mut().set_display_name("Link");
        let after = notation.get_block_class_name(&BlockCall::new());

        assert_eq!(&*before, "Button");
        assert_eq!(&*after, "Link");
    }

    #[test]
    fn test_element_class_name() {
        let component = ComponentIdentity::with_display_name("Tooltip").shared();
        let options = BemOptions::new(
            "extra",
            mods_of(vec![("open", BemValue::from(true))]),
            IndexMap::new(),
        );
        let notation = Nomenclator::initialize(component, &options, "Tooltip");

        assert_eq!(
            notation.get_element_class_name(&ElementCall::elem("icon")),
            "Tooltip__icon"
        );
        assert_eq!(
            notation.get_element_class_name(&ElementCall::new()),
            "Tooltip__elem"
        );
        assert_eq!(
            notation.get_element_class_name(
                &ElementCall::elem("arrow")
                    .with_mod("side", "top left")
                    .with_mix("shadow", true)
            ),
            "Tooltip__arrow Tooltip__arrow_side_top-left shadow"
        );
    }

    #[test]
    fn test_block_accessor_memoized_on_dependencies() {
        let component = ComponentIdentity::new().shared();
        let nomenclator = Nomenclator::new(component);
        let mut options = BemOptions::default();

        let first = nomenclator.render(&options, "Card");
        let same = nomenclator.render(&options, "Card");
        assert!(Rc::ptr_eq(&first.block, &same.block));

        options.set_mods(ModifierMap::new());
        let replaced_mods = nomenclator.render(&options, "Card");
        assert!(!Rc::ptr_eq(&same.block, &replaced_mods.block));
        assert!(Rc::ptr_eq(&same.element, &replaced_mods.element));

        options.set_class_name("wide");
        let new_class = nomenclator.render(&options, "Card");
        assert!(!Rc::ptr_eq(&replaced_mods.block, &new_class.block));
        assert_eq!(
            &*new_class.get_block_class_name(&BlockCall::new()),
            "Card wide"
        );
    }

    #[test]
    fn test_element_accessor_memoized_on_display_name() {
        let component = ComponentIdentity::with_display_name("Menu").shared();
        let nomenclator = Nomenclator::new(component);
        let options = BemOptions::default();

        let first = nomenclator.render(&options, "Menu");
        let second = nomenclator.render(&options, "Menu");
        let renamed = nomenclator.render(&options, "Dropdown");

        assert!(Rc::ptr_eq(&first.element, &second.element));
        assert!(!Rc::ptr_eq(&second.element, &renamed.element));
        assert!(!Rc::ptr_eq(&second.block, &renamed.block));

        // The component already had a name, so it is still used.
        assert_eq!(
            renamed.get_element_class_name(&ElementCall::elem("item")),
            "Menu__item"
        );
    }
}
