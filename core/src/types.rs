/// What to do with a rule-index stream that ends inside an integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleStreamPolicy {
    /// Drop the unterminated trailing group. Captured v0/v1 headers end this way.
    #[default]
    Lenient,
    /// Fail with `HeaderFormatError::Truncated`.
    Strict,
}

/// Runtime knobs for a decode call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    pub rule_stream: RuleStreamPolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { rule_stream: RuleStreamPolicy::Strict }
    }

    pub fn with_rule_stream(mut self, policy: RuleStreamPolicy) -> Self {
        self.rule_stream = policy;
        self
    }
}
