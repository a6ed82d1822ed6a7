//! The item renderer.
//!
//! [`ItemRenderer`] decides which elements of an item appear in a layout
//! position and renders them. For every descriptor configured for the
//! position it resolves the element on the item, checks access for the
//! acting user and value presence, and lets display listeners veto it.
//! Existence checks stop at the first element that survives; position
//! renders collect all survivors and render them through the template
//! engine.

use log::{debug, info};

use placard_core::{
    item::Item,
    params::{LayoutArgs, PositionArgs},
    user::User,
};

use crate::{
    config::{AppConfig, RenderConfig},
    context::RenderContext,
    error::PlacardError,
    event::{DisplayListener, ElementEvent, EventDispatcher},
    layout::{PositionCatalog, layout_name},
    positions::{PositionEntry, PositionStore},
    template::{TemplateArgs, TemplateEngine},
};

/// Renders items through layouts and their positions.
///
/// # Examples
///
/// ```rust,no_run
/// use placard::{
///     ItemRenderer, PlacardError, RenderContext, TemplateArgs, TemplateEngine,
///     item::Record, params::LayoutArgs,
/// };
///
/// struct Engine;
///
/// impl TemplateEngine for Engine {
///     fn render(
///         &self,
///         renderer: &ItemRenderer,
///         ctx: &RenderContext<'_>,
///         template: &str,
///         _args: &TemplateArgs<'_>,
///     ) -> Result<String, PlacardError> {
///         Ok(format!("<!-- {template} -->"))
///     }
/// }
///
/// let renderer = ItemRenderer::builder(Engine).build();
/// let record = Record::new("1", "blog", "article");
/// let html = renderer
///     .render("item.full", &LayoutArgs::for_item(&record))
///     .expect("Failed to render");
/// ```
pub struct ItemRenderer {
    engine: Box<dyn TemplateEngine>,
    dispatcher: EventDispatcher,
    store: PositionStore,
    catalog: PositionCatalog,
    user: User,
    config: RenderConfig,
}

impl ItemRenderer {
    /// Starts building a renderer around a template engine.
    pub fn builder(engine: impl TemplateEngine + 'static) -> ItemRendererBuilder {
        ItemRendererBuilder::new(engine)
    }

    /// The acting user access checks are evaluated for.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Declared positions per layout.
    pub fn catalog(&self) -> &PositionCatalog {
        &self.catalog
    }

    /// Position assignments.
    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the layout at `layout` (a dotted path such as `item.full`).
    ///
    /// When `args` carries an item, `item:beforedisplay` fires before the
    /// layout renders and `item:afterdisplay` may replace the result.
    /// Without an item the engine output is returned as is.
    ///
    /// # Errors
    ///
    /// Propagates template engine errors, including those of positions
    /// rendered from within the layout.
    pub fn render(&self, layout: &str, args: &LayoutArgs<'_>) -> Result<String, PlacardError> {
        let item = args.item();
        info!(layout, item = item.map(|item| item.id()); "Rendering layout");

        if let Some(item) = item {
            self.dispatcher.item_before_display(item);
        }

        let ctx = RenderContext::new(item, None);
        let html = self.render_template(
            &ctx,
            layout,
            &TemplateArgs::Layout {
                item,
                vars: args.vars(),
            },
        )?;

        Ok(match item {
            Some(item) => self.dispatcher.item_after_display(item, html),
            None => html,
        })
    }

    /// Renders `template` through the engine in a context scoped to it.
    ///
    /// The scoped context keeps the item of `ctx` and takes the last segment
    /// of `template` as its layout.
    ///
    /// # Errors
    ///
    /// Propagates template engine errors.
    pub fn render_template(
        &self,
        ctx: &RenderContext<'_>,
        template: &str,
        args: &TemplateArgs<'_>,
    ) -> Result<String, PlacardError> {
        let scoped = ctx.with_layout(layout_name(template));
        debug!(template, layout = scoped.layout(); "Rendering template");
        self.engine.render(self, &scoped, template, args)
    }

    /// Checks whether `position` of the current layout produces output for
    /// the current item.
    ///
    /// Stops at the first element the user can access, that has a value and
    /// that no listener suppresses.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::MissingItem`] or
    /// [`PlacardError::MissingLayout`] if `ctx` lacks either, and propagates
    /// configuration loading errors.
    pub fn check_position(&self, ctx: &RenderContext<'_>, position: &str) -> Result<bool, PlacardError> {
        let (item, layout) = ctx.require(position)?;

        for entry in self.position_entries(item, layout, position)? {
            let Some(element) = item.element(entry.element()) else {
                debug!(element = entry.element(), position; "Skipping unknown element");
                continue;
            };

            let params = entry.to_params(layout, position);
            if element.can_access(&self.user) && element.has_value(&params) {
                let event = ElementEvent::new(item, element, &params);
                if !self.dispatcher.element_before_display(&event).is_suppressed() {
                    debug!(element = entry.element(), position; "Position has output");
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Checks whether any position declared by the layout at `path`
    /// produces output.
    ///
    /// `item` is only used when `ctx` has no item, and the layout named by
    /// the last segment of `path` only when `ctx` has no layout. Positions
    /// are checked in declaration order.
    ///
    /// # Errors
    ///
    /// Fails like [`check_position`](Self::check_position) once a declared
    /// position is checked without any item, and propagates declaration
    /// loading errors.
    pub fn check_positions<'a>(
        &self,
        ctx: &RenderContext<'a>,
        path: &'a str,
        item: Option<&'a dyn Item>,
    ) -> Result<bool, PlacardError> {
        let Some(declared) = self.catalog.positions(path)? else {
            return Ok(false);
        };

        let ctx = RenderContext::new(
            ctx.item().or(item),
            Some(ctx.layout().unwrap_or_else(|| layout_name(path))),
        );

        for position in declared.positions() {
            if self.check_position(&ctx, position)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Renders every visible element of `position`, joined by newlines.
    ///
    /// Elements render through the `element.<style>` template, with style
    /// taken from `args` or the configured default. `first` and `last` are
    /// set relative to the rendered elements only. `element:afterdisplay`
    /// listeners may replace each fragment.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::MissingItem`] or
    /// [`PlacardError::MissingLayout`] if `ctx` lacks either, and propagates
    /// configuration and template errors.
    pub fn render_position(
        &self,
        ctx: &RenderContext<'_>,
        position: &str,
        args: &PositionArgs,
    ) -> Result<String, PlacardError> {
        let (item, layout) = ctx.require(position)?;
        let style = args.style().unwrap_or(self.config.default_style());

        let mut visible = Vec::new();
        for entry in self.position_entries(item, layout, position)? {
            let Some(element) = item.element(entry.element()) else {
                debug!(element = entry.element(), position; "Skipping unknown element");
                continue;
            };

            if !element.can_access(&self.user) {
                debug!(element = entry.element(), position; "Access denied");
                continue;
            }

            let params = entry.to_params(layout, position).with_args(args);
            if !element.has_value(&params) {
                continue;
            }

            let event = ElementEvent::new(item, element, &params);
            if self.dispatcher.element_before_display(&event).is_suppressed() {
                debug!(element = entry.element(), position; "Suppressed by listener");
                continue;
            }

            visible.push((element, params));
        }

        let template = format!("element.{style}");
        let count = visible.len();
        let mut output = Vec::with_capacity(count);

        for (i, (element, params)) in visible.into_iter().enumerate() {
            let params = params.with_bounds(i == 0, i + 1 == count);
            let html = self.render_template(
                ctx,
                &template,
                &TemplateArgs::Element {
                    element,
                    params: &params,
                },
            )?;

            let event = ElementEvent::new(item, element, &params);
            output.push(self.dispatcher.element_after_display(&event, html));
        }

        debug!(position, layout, rendered = count; "Rendered position");
        Ok(output.join("\n"))
    }

    /// Descriptors assigned to `position` for the item's group and type in
    /// `layout`.
    fn position_entries(
        &self,
        item: &dyn Item,
        layout: &str,
        position: &str,
    ) -> Result<Vec<PositionEntry>, PlacardError> {
        let config = self.store.config(self.config.config_dir())?;
        let key = format!("{}.{}.{}", item.group(), item.type_id(), layout);
        Ok(config.position_entries(&key, position))
    }
}

impl std::fmt::Debug for ItemRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRenderer")
            .field("dispatcher", &self.dispatcher)
            .field("store", &self.store)
            .field("catalog", &self.catalog)
            .field("user", &self.user)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ItemRenderer`].
///
/// Stores that are not set explicitly read from the configured renderer
/// root, or start empty without one.
pub struct ItemRendererBuilder {
    engine: Box<dyn TemplateEngine>,
    dispatcher: EventDispatcher,
    store: Option<PositionStore>,
    catalog: Option<PositionCatalog>,
    user: User,
    config: AppConfig,
}

impl ItemRendererBuilder {
    fn new(engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            dispatcher: EventDispatcher::new(),
            store: None,
            catalog: None,
            user: User::guest(),
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the acting user. Defaults to a guest.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    /// Registers a display listener after those already registered.
    pub fn with_listener(mut self, listener: impl DisplayListener + 'static) -> Self {
        self.dispatcher.register(listener);
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_position_store(mut self, store: PositionStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_catalog(mut self, catalog: PositionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> ItemRenderer {
        let root = self.config.paths().root();
        let store = self.store.unwrap_or_else(|| match root {
            Some(root) => PositionStore::from_dir(root),
            None => PositionStore::new(),
        });
        let catalog = self.catalog.unwrap_or_else(|| match root {
            Some(root) => PositionCatalog::from_dir(root),
            None => PositionCatalog::new(),
        });

        ItemRenderer {
            engine: self.engine,
            dispatcher: self.dispatcher,
            store,
            catalog,
            user: self.user,
            config: self.config.render().clone(),
        }
    }
}
