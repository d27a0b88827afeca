//! A fluent entry point: configure paper, data, and the template resolver
//! once, then build as many document trees against it as needed.

use escp_idf::LayoutNode;
use escp_template::Resolver;
use escp_traits::TemplateResolver;
use escp_types::Paper;
use serde_json::Value;

use crate::error::EscpError;
use crate::output::EscpOutput;

pub struct DocumentBuilder {
    paper: Paper,
    data: Value,
    resolver: Box<dyn TemplateResolver>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self { paper: Paper::default(), data: Value::Null, resolver: Box::new(Resolver::new()) }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paper(mut self, paper: Paper) -> Self {
        self.paper = paper;
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Swaps in a different expression grammar. Defaults to
    /// `escp_template::Resolver`, the `{{path | filter:arg}}` implementation.
    pub fn resolver(mut self, resolver: Box<dyn TemplateResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn build(&self, root: &LayoutNode) -> Result<EscpOutput, EscpError> {
        crate::render_document(root, &self.data, self.resolver.as_ref(), self.paper)
    }
}
