//! Display lifecycle events.
//!
//! The renderer announces four events while displaying an item:
//!
//! | [`Event`]                      | fired                                   | listener result      |
//! |--------------------------------|-----------------------------------------|----------------------|
//! | `item:beforedisplay`           | before a layout renders an item         | none                 |
//! | `item:afterdisplay`            | after a layout rendered an item         | replacement HTML     |
//! | `element:beforedisplay`        | for each visible element of a position  | [`Visibility`]       |
//! | `element:afterdisplay`         | after each element fragment rendered    | replacement HTML     |
//!
//! Listeners never mutate the renderer's state. They return a decision and
//! the renderer applies it. Listeners are notified in registration order.
//!
//! # Example
//!
//! ```
//! # use placard::event::{DisplayListener, ElementEvent, EventDispatcher, Visibility};
//! struct HideDrafts;
//!
//! impl DisplayListener for HideDrafts {
//!     fn element_before_display(&self, event: &ElementEvent<'_>) -> Visibility {
//!         if event.params().flag("draft") {
//!             Visibility::Suppress
//!         } else {
//!             Visibility::Show
//!         }
//!     }
//! }
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(HideDrafts);
//! assert_eq!(dispatcher.len(), 1);
//! ```

use log::trace;

use placard_core::{element::Element, item::Item, params::Params};

/// The display events announced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    ItemBeforeDisplay,
    ItemAfterDisplay,
    ElementBeforeDisplay,
    ElementAfterDisplay,
}

impl Event {
    /// Returns the event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemBeforeDisplay => "item:beforedisplay",
            Self::ItemAfterDisplay => "item:afterdisplay",
            Self::ElementBeforeDisplay => "element:beforedisplay",
            Self::ElementAfterDisplay => "element:afterdisplay",
        }
    }
}

/// Decision returned from `element:beforedisplay`.
///
/// Suppressing an element hides it from the current check or render only;
/// its access and value facts are unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Show,
    Suppress,
}

impl Visibility {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppress)
    }
}

/// Subject of the element events.
pub struct ElementEvent<'a> {
    item: &'a dyn Item,
    element: &'a dyn Element,
    params: &'a Params,
}

impl<'a> ElementEvent<'a> {
    pub fn new(item: &'a dyn Item, element: &'a dyn Element, params: &'a Params) -> Self {
        Self {
            item,
            element,
            params,
        }
    }

    /// The item owning the element.
    pub fn item(&self) -> &'a dyn Item {
        self.item
    }

    pub fn element(&self) -> &'a dyn Element {
        self.element
    }

    /// Parameters the element is checked or rendered with.
    pub fn params(&self) -> &'a Params {
        self.params
    }
}

/// Observer of display events.
///
/// Every hook has a no-op default, so listeners implement only the events
/// they care about.
pub trait DisplayListener {
    fn item_before_display(&self, _item: &dyn Item) {}

    /// Returns replacement HTML for the rendered item, if any.
    fn item_after_display(&self, _item: &dyn Item, _html: &str) -> Option<String> {
        None
    }

    fn element_before_display(&self, _event: &ElementEvent<'_>) -> Visibility {
        Visibility::Show
    }

    /// Returns a replacement for the rendered element fragment, if any.
    fn element_after_display(&self, _event: &ElementEvent<'_>, _html: &str) -> Option<String> {
        None
    }
}

/// Ordered list of [`DisplayListener`]s.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Box<dyn DisplayListener>>,
}

impl EventDispatcher {
    /// Creates a dispatcher without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. Listeners are notified in registration order.
    pub fn register(&mut self, listener: impl DisplayListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Announces `item:beforedisplay`.
    pub fn item_before_display(&self, item: &dyn Item) {
        trace!(event = Event::ItemBeforeDisplay.name(), item = item.id(); "Dispatching");
        for listener in &self.listeners {
            listener.item_before_display(item);
        }
    }

    /// Announces `item:afterdisplay` and returns the final HTML.
    ///
    /// Replacements chain: each listener sees the HTML left by the previous
    /// one.
    pub fn item_after_display(&self, item: &dyn Item, html: String) -> String {
        trace!(event = Event::ItemAfterDisplay.name(), item = item.id(); "Dispatching");
        self.listeners.iter().fold(html, |html, listener| {
            listener.item_after_display(item, &html).unwrap_or(html)
        })
    }

    /// Announces `element:beforedisplay`.
    ///
    /// Every listener is notified; the element is suppressed if any of them
    /// asks for it.
    pub fn element_before_display(&self, event: &ElementEvent<'_>) -> Visibility {
        trace!(
            event = Event::ElementBeforeDisplay.name(),
            item = event.item().id(),
            element = event.params().element();
            "Dispatching"
        );
        self.listeners
            .iter()
            .map(|listener| listener.element_before_display(event))
            .fold(Visibility::Show, |acc, visibility| {
                if visibility.is_suppressed() {
                    Visibility::Suppress
                } else {
                    acc
                }
            })
    }

    /// Announces `element:afterdisplay` and returns the final fragment.
    pub fn element_after_display(&self, event: &ElementEvent<'_>, html: String) -> String {
        trace!(
            event = Event::ElementAfterDisplay.name(),
            item = event.item().id(),
            element = event.params().element();
            "Dispatching"
        );
        self.listeners.iter().fold(html, |html, listener| {
            listener.element_after_display(event, &html).unwrap_or(html)
        })
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use placard_core::{element::Field, item::Record};

    use super::*;

    /// Records every hook invocation under a label.
    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        visibility: Visibility,
        suffix: Option<&'static str>,
    }

    impl Recorder {
        fn new(label: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                label,
                log: Rc::clone(log),
                visibility: Visibility::Show,
                suffix: None,
            }
        }
    }

    impl DisplayListener for Recorder {
        fn item_before_display(&self, item: &dyn Item) {
            self.log
                .borrow_mut()
                .push(format!("{}:item-before:{}", self.label, item.id()));
        }

        fn item_after_display(&self, _item: &dyn Item, html: &str) -> Option<String> {
            self.suffix.map(|suffix| format!("{html}{suffix}"))
        }

        fn element_before_display(&self, event: &ElementEvent<'_>) -> Visibility {
            self.log.borrow_mut().push(format!(
                "{}:element-before:{}",
                self.label,
                event.params().element()
            ));
            self.visibility
        }

        fn element_after_display(&self, _event: &ElementEvent<'_>, html: &str) -> Option<String> {
            self.suffix.map(|suffix| format!("{html}{suffix}"))
        }
    }

    fn fixture() -> (Record, Params) {
        let record =
            Record::new("42", "blog", "article").with_element("title", Field::new("text", ["Hi"]));
        let params = Params::new("title", "full", "title", 0);
        (record, params)
    }

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ItemBeforeDisplay.name(), "item:beforedisplay");
        assert_eq!(Event::ItemAfterDisplay.name(), "item:afterdisplay");
        assert_eq!(Event::ElementBeforeDisplay.name(), "element:beforedisplay");
        assert_eq!(Event::ElementAfterDisplay.name(), "element:afterdisplay");
    }

    #[test]
    fn test_empty_dispatcher_is_identity() {
        let (record, params) = fixture();
        let element = record.element("title").unwrap();
        let event = ElementEvent::new(&record, element, &params);
        let dispatcher = EventDispatcher::new();

        assert!(dispatcher.is_empty());
        assert_eq!(dispatcher.element_before_display(&event), Visibility::Show);
        assert_eq!(dispatcher.element_after_display(&event, "<p>".to_string()), "<p>");
        assert_eq!(dispatcher.item_after_display(&record, "<div>".to_string()), "<div>");
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        let (record, _) = fixture();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Recorder::new("first", &log));
        dispatcher.register(Recorder::new("second", &log));

        dispatcher.item_before_display(&record);

        assert_eq!(
            *log.borrow(),
            ["first:item-before:42", "second:item-before:42"]
        );
    }

    #[test]
    fn test_any_suppress_wins_and_all_listeners_run() {
        let (record, params) = fixture();
        let element = record.element("title").unwrap();
        let event = ElementEvent::new(&record, element, &params);
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Recorder {
            visibility: Visibility::Suppress,
            ..Recorder::new("hide", &log)
        });
        dispatcher.register(Recorder::new("show", &log));

        assert_eq!(dispatcher.element_before_display(&event), Visibility::Suppress);
        assert_eq!(
            *log.borrow(),
            ["hide:element-before:title", "show:element-before:title"]
        );
    }

    #[test]
    fn test_replacements_chain() {
        let (record, params) = fixture();
        let element = record.element("title").unwrap();
        let event = ElementEvent::new(&record, element, &params);
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Recorder {
            suffix: Some("-a"),
            ..Recorder::new("a", &log)
        });
        dispatcher.register(Recorder::new("noop", &log));
        dispatcher.register(Recorder {
            suffix: Some("-b"),
            ..Recorder::new("b", &log)
        });

        assert_eq!(dispatcher.element_after_display(&event, "x".to_string()), "x-a-b");
        assert_eq!(dispatcher.item_after_display(&record, "y".to_string()), "y-a-b");
    }
}
