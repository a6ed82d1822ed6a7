//! Built-in templates for previewing layouts.
//!
//! Every layout renders as one `<section>` per declared position that
//! produces output. Elements render as a `<div>` carrying the style and the
//! `first`/`last` markers, with an optional `label` option in front of the
//! value.

use placard::{
    ItemRenderer, PlacardError, RenderContext, TemplateArgs, TemplateEngine,
    element::{Element, escape_html},
    params::{Params, PositionArgs},
    value::{Value, ValueMap},
};

/// Template engine producing plain preview markup.
#[derive(Debug, Default)]
pub struct PreviewEngine;

impl TemplateEngine for PreviewEngine {
    fn render(
        &self,
        renderer: &ItemRenderer,
        ctx: &RenderContext<'_>,
        template: &str,
        args: &TemplateArgs<'_>,
    ) -> Result<String, PlacardError> {
        match args {
            TemplateArgs::Layout { item: None, .. } => Ok(String::new()),
            TemplateArgs::Layout { item: Some(_), vars } => {
                render_layout(renderer, ctx, template, vars)
            }
            TemplateArgs::Element { element, params } => {
                Ok(render_element(*element, params, ctx.layout().unwrap_or("default")))
            }
        }
    }
}

fn render_layout(
    renderer: &ItemRenderer,
    ctx: &RenderContext<'_>,
    template: &str,
    vars: &ValueMap,
) -> Result<String, PlacardError> {
    let Some(declared) = renderer.catalog().positions(template)? else {
        return Err(PlacardError::new_template_error(
            template,
            "layout declares no positions",
        ));
    };

    let mut args = PositionArgs::new();
    if let Some(style) = vars.get("style").and_then(Value::as_str) {
        args = args.with_style(style);
    }

    let mut sections = Vec::new();
    for position in declared.positions() {
        if !renderer.check_position(ctx, position)? {
            continue;
        }

        let html = renderer.render_position(ctx, position, &args)?;
        sections.push(render_section(position, &html));
    }

    Ok(sections.join("\n"))
}

fn render_section(position: &str, html: &str) -> String {
    format!(
        "<section class=\"position position-{}\">\n{html}\n</section>",
        escape_html(position)
    )
}

fn render_element(element: &dyn Element, params: &Params, style: &str) -> String {
    let mut classes = format!("element element-{}", escape_html(style));
    if params.first() == Some(true) {
        classes.push_str(" first");
    }
    if params.last() == Some(true) {
        classes.push_str(" last");
    }

    let label = params
        .get("label")
        .and_then(Value::as_str)
        .map(|label| format!("<span class=\"label\">{}</span> ", escape_html(label)))
        .unwrap_or_default();

    format!(
        "<div class=\"{classes}\">{label}{}</div>",
        element.render(params)
    )
}

#[cfg(test)]
mod tests {
    use placard::element::Field;

    use super::*;

    #[test]
    fn test_render_element_markup() {
        let field = Field::new("text", ["Ada"]);
        let params = Params::new("author", "full", "meta", 0)
            .with_args(&PositionArgs::new().with("label", "By"))
            .with_bounds(true, false);

        assert_eq!(
            render_element(&field, &params, "default"),
            "<div class=\"element element-default first\"><span class=\"label\">By</span> Ada</div>"
        );
    }

    #[test]
    fn test_class_names_are_escaped() {
        let field = Field::new("text", ["x"]);
        let params = Params::new("a", "full", "meta", 0);
        assert_eq!(
            render_element(&field, &params, "a\"b"),
            "<div class=\"element element-a&quot;b\">x</div>"
        );
        assert_eq!(
            render_section("side<bar>", "x"),
            "<section class=\"position position-side&lt;bar&gt;\">\nx\n</section>"
        );
    }

    #[test]
    fn test_render_element_without_flags() {
        let field = Field::new("text", ["x"]);
        let params = Params::new("a", "full", "meta", 0);
        assert_eq!(
            render_element(&field, &params, "block"),
            "<div class=\"element element-block\">x</div>"
        );
    }
}
