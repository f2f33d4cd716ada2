// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Generated shader source as a list of typed fragments.

Code generation in this crate never formats strings directly.  It appends [`Fragment`]s to a
[`SourceBuilder`], which renders them once at the end:

```
use vertex_inputs::source::{Identifier, SourceBuilder};

let name = Identifier::new("aLabel0").unwrap();
let mut source = SourceBuilder::new();
source
    .text("  result[")
    .integer(1)
    .text("] = ")
    .identifier(&name)
    .text("[")
    .integer(1)
    .text("];\n");
assert_eq!(source.finish(), "  result[1] = aLabel0[1];\n");
```
*/

mod fragment;
mod identifier;

pub use fragment::Fragment;
pub use identifier::{Identifier, IdentifierError};

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuilder {
    fragments: Vec<Fragment>,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    pub fn text(&mut self, text: &'static str) -> &mut Self {
        self.push(Fragment::Text(text))
    }

    pub fn identifier(&mut self, identifier: &Identifier) -> &mut Self {
        self.push(Fragment::Identifier(identifier.clone()))
    }

    pub fn type_name(&mut self, type_name: &'static str) -> &mut Self {
        self.push(Fragment::TypeName(type_name))
    }

    pub fn integer(&mut self, value: usize) -> &mut Self {
        self.push(Fragment::Integer(value))
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Renders every fragment in order.
    pub fn finish(&self) -> String {
        self.to_string()
    }
}

impl Display for SourceBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            Display::fmt(fragment, f)?;
        }
        Ok(())
    }
}
