use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Context,
    value::core::{PsType, PsValue},
};

/// A variable as stored in a scope frame.
///
/// `value` always has type `declared_type`; every write goes through the
/// type rules before it reaches a binding.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBinding {
    /// The variable's name.
    pub name:          String,
    /// The type fixed by the declaration.
    pub declared_type: PsType,
    /// The current value.
    pub value:         PsValue,
    /// `false` for `const` variables.
    pub is_mutable:    bool,
}

/// A stack of lexical frames mapping names to bindings.
///
/// The bottom frame is the global frame and is never popped. Lookups search
/// from the innermost frame outward, so inner declarations shadow outer ones.
///
/// # Example
/// ```
/// use printscript::interpreter::{
///     evaluator::scope::{VariableBinding, VariableStore},
///     value::core::{PsType, PsValue},
/// };
///
/// let mut store = VariableStore::default();
/// store.push_frame();
/// store.declare(VariableBinding { name:          "x".to_string(),
///                                 declared_type: PsType::Number,
///                                 value:         PsValue::Number(1.0),
///                                 is_mutable:    true, });
///
/// assert!(store.lookup("x").is_some());
/// store.pop_frame();
/// assert!(store.lookup("x").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStore {
    frames: Vec<HashMap<String, VariableBinding>>,
}

impl Default for VariableStore {
    fn default() -> Self {
        Self { frames: vec![HashMap::new()] }
    }
}

impl VariableStore {
    /// The number of frames, the global frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes an empty innermost frame.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
        debug!(depth = self.frames.len(), "pushed scope frame");
    }

    /// Pops the innermost frame and every binding in it.
    ///
    /// Does nothing when only the global frame is left.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            debug!(depth = self.frames.len(), "popped scope frame");
        }
    }

    /// Adds `binding` to the innermost frame, replacing a binding of the same
    /// name declared earlier in that frame.
    pub fn declare(&mut self, binding: VariableBinding) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(binding.name.clone(), binding);
        }
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&VariableBinding> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Replaces the value of the innermost binding of `name`, in the frame
    /// that owns it.
    ///
    /// # Returns
    /// `false` if no frame binds `name`.
    pub fn assign(&mut self, name: &str, value: PsValue) -> bool {
        match self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(name)) {
            Some(binding) => {
                binding.value = value;
                true
            },
            None => false,
        }
    }
}

/// Pops the frame pushed by [`Context::scoped`] when dropped.
///
/// The guard dereferences to the context, so code running inside the scope
/// uses it in place of the context itself.
pub struct ScopeGuard<'c, 'io> {
    context: &'c mut Context<'io>,
}

impl<'io> Deref for ScopeGuard<'_, 'io> {
    type Target = Context<'io>;

    fn deref(&self) -> &Self::Target {
        &*self.context
    }
}

impl DerefMut for ScopeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.context
    }
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        self.context.store.pop_frame();
    }
}

impl<'io> Context<'io> {
    /// Pushes a new frame and returns a guard that will pop it automatically.
    ///
    /// The frame is popped however the scope is left, early error returns
    /// included.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use printscript::interpreter::{
    ///     evaluator::core::Context,
    ///     io::{BufferedOutput, ScriptedInput},
    /// };
    ///
    /// let mut input = ScriptedInput::default();
    /// let env: HashMap<String, String> = HashMap::new();
    /// let mut output = BufferedOutput::default();
    /// let mut context = Context::new(&mut input, &env, &mut output);
    ///
    /// {
    ///     let scope = context.scoped();
    ///     assert_eq!(scope.store().depth(), 2);
    /// }
    ///
    /// assert_eq!(context.store().depth(), 1);
    /// ```
    pub fn scoped(&mut self) -> ScopeGuard<'_, 'io> {
        self.store.push_frame();
        ScopeGuard { context: self }
    }
}
