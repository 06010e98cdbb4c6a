use super::strategy::EmissionStrategy;
use crate::config::GeneratorConfig;
use crate::graph::Node;

/// Renders single nodes into declaration lines for the configured target language.
pub struct NodeEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> NodeEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Resolves the strategy for an operation: user aliases first, then the exception table.
    pub fn strategy_for(&self, operation: &str) -> EmissionStrategy {
        self.config
            .strategy_aliases
            .get(operation)
            .copied()
            .unwrap_or_else(|| EmissionStrategy::for_operation(operation))
    }

    /// Emits the declaration lines for one node.
    ///
    /// A node without a descriptor for the target language, or whose
    /// descriptor names no operation, contributes nothing.
    pub fn emit(&self, node: &Node) -> Vec<String> {
        let Some(descriptor) = node.descriptor(&self.config.language) else {
            log::debug!(
                "Node '{}' has no '{}' descriptor, skipping",
                node.name,
                self.config.language
            );
            return Vec::new();
        };
        let Some(operation) = descriptor.operation() else {
            log::debug!("Node '{}' descriptor names no operation, skipping", node.name);
            return Vec::new();
        };

        let strategy = self.strategy_for(operation);
        log::debug!(
            "Emitting node '{}' ({}) with {:?} strategy",
            node.name,
            operation,
            strategy
        );
        strategy.emit(node, descriptor, operation)
    }
}
