//! Shared fixtures for the renderer integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use placard::{
    ItemRenderer, ItemRendererBuilder, PlacardError, RenderContext, TemplateArgs, TemplateEngine,
    element::{Access, Field},
    event::{DisplayListener, ElementEvent, Visibility},
    item::{Item, Record},
    layout::PositionCatalog,
    params::PositionArgs,
    positions::PositionStore,
};

pub const DECLARATIONS: &str = r#"
    [full]
    name = "Full"

    [full.positions]
    title = "Title"
    meta = "Meta"
    content = "Content"
    sidebar = "Sidebar"

    [teaser.positions]
    title = "Title"

    [static]
    name = "Static"
"#;

pub const ASSIGNMENTS: &str = r#"
    [blog.article.full]
    title = [{ element = "name" }]
    meta = [
        { element = "secret" },
        { element = "author", label = "By" },
        { element = "date" },
    ]
    content = [
        { element = "empty" },
        { element = "ghost" },
        { element = "body" },
        { element = "summary" },
    ]

    [blog.article.teaser]
    title = [{ element = "name", link = true }]
"#;

/// The article used by most tests.
pub fn article() -> Record {
    Record::new("42", "blog", "article")
        .with_element("name", Field::new("text", ["Hello"]))
        .with_element(
            "secret",
            Field::new("text", ["classified"]).with_access(Access::Group("editors".to_string())),
        )
        .with_element("author", Field::new("text", ["Ada"]))
        .with_element("date", Field::new("date", ["2024-01-01"]))
        .with_element("empty", Field::new("text", [""]))
        .with_element("body", Field::new("textarea", ["Body text"]))
        .with_element("summary", Field::new("textarea", ["Summary"]))
}

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Template engine rendering elements as `name:value` with flags and
/// layouts as the positions that produce output.
///
/// Every element render is recorded as
/// `<template> ctx=<context layout> params=<params layout> index=<index>`.
pub struct TestEngine {
    pub calls: Log,
}

impl TemplateEngine for TestEngine {
    fn render(
        &self,
        renderer: &ItemRenderer,
        ctx: &RenderContext<'_>,
        template: &str,
        args: &TemplateArgs<'_>,
    ) -> Result<String, PlacardError> {
        match args {
            TemplateArgs::Element { element, params } => {
                self.calls.borrow_mut().push(format!(
                    "{template} ctx={} params={} index={}",
                    ctx.layout().unwrap_or("-"),
                    params.layout(),
                    params.index()
                ));

                let mut html = format!("{}:{}", params.element(), element.render(params));
                if params.first() == Some(true) {
                    html.push_str(" first");
                }
                if params.last() == Some(true) {
                    html.push_str(" last");
                }

                if template == "element.nested" {
                    // Render another layout of the same item from inside an element
                    let nested = renderer.render_position(
                        &ctx.with_layout("teaser"),
                        "title",
                        &PositionArgs::new(),
                    )?;
                    let has_teaser = renderer.check_positions(ctx, "item.teaser", None)?;
                    html.push_str(&format!(" ({nested}; teaser={has_teaser})"));
                }

                Ok(html)
            }
            TemplateArgs::Layout { item: Some(_), .. } => {
                let Some(declared) = renderer.catalog().positions(template)? else {
                    return Err(PlacardError::new_template_error(template, "unknown layout"));
                };

                let mut parts = Vec::new();
                for position in declared.positions() {
                    if renderer.check_position(ctx, position)? {
                        let html = renderer.render_position(ctx, position, &PositionArgs::new())?;
                        parts.push(format!("<{position}>{html}</{position}>"));
                    }
                }
                Ok(parts.join(""))
            }
            TemplateArgs::Layout { item: None, vars } => {
                Ok(format!("static:{template}:{}", vars.len()))
            }
        }
    }
}

/// Listener recording events and optionally suppressing or rewriting.
pub struct Recorder {
    pub log: Log,
    pub suppress: HashSet<String>,
    pub wrap_elements: bool,
    pub wrap_items: bool,
}

impl Recorder {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            suppress: HashSet::new(),
            wrap_elements: false,
            wrap_items: false,
        }
    }

    pub fn suppressing(mut self, element: &str) -> Self {
        self.suppress.insert(element.to_string());
        self
    }
}

impl DisplayListener for Recorder {
    fn item_before_display(&self, item: &dyn Item) {
        self.log
            .borrow_mut()
            .push(format!("item:before:{}", item.id()));
    }

    fn item_after_display(&self, item: &dyn Item, html: &str) -> Option<String> {
        self.log
            .borrow_mut()
            .push(format!("item:after:{}", item.id()));
        self.wrap_items.then(|| format!("<article>{html}</article>"))
    }

    fn element_before_display(&self, event: &ElementEvent<'_>) -> Visibility {
        let element = event.params().element();
        self.log
            .borrow_mut()
            .push(format!("element:before:{element}"));
        if self.suppress.contains(element) {
            Visibility::Suppress
        } else {
            Visibility::Show
        }
    }

    fn element_after_display(&self, event: &ElementEvent<'_>, html: &str) -> Option<String> {
        self.log
            .borrow_mut()
            .push(format!("element:after:{}", event.params().element()));
        self.wrap_elements.then(|| format!("<em>{html}</em>"))
    }
}

/// Builder with the shared declarations and assignments loaded in memory.
pub fn renderer_builder(calls: &Log) -> ItemRendererBuilder {
    let catalog = PositionCatalog::new();
    catalog
        .insert_str("item", DECLARATIONS)
        .expect("valid declarations");

    let store = PositionStore::new();
    store
        .insert_str("item", ASSIGNMENTS)
        .expect("valid assignments");

    ItemRenderer::builder(TestEngine {
        calls: Rc::clone(calls),
    })
    .with_catalog(catalog)
    .with_position_store(store)
}
