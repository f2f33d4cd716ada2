// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Reusable shading-language source snippets.

A [`Snippet`] is a named block of source text with an ordered list of prerequisite snippets.  Before
emission a set of snippets is *flattened*: prerequisites come first and every snippet appears once,
however many dependents ask for it.

```
use vertex_inputs::snippets::{Snippet, catalogue};
use vertex_inputs::types::DataType;

let order = Snippet::flatten_all([DataType::Uint8.snippet(), DataType::Uint16.snippet()]);
let names: Vec<_> = order.iter().map(|s| s.name()).collect();
assert_eq!(names, ["uint64", "uint8", "uint16"]);
assert!(std::ptr::eq(Snippet::by_name("uint16").unwrap(), &catalogue::UINT16));
```
*/

pub mod catalogue;

use crate::types::LogicalType;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::sync::LazyLock;

pub struct Snippet {
    name: &'static str,
    prerequisites: &'static [&'static Snippet],
    source: &'static str,
}

static BY_NAME: LazyLock<HashMap<&'static str, &'static Snippet>> = LazyLock::new(|| {
    catalogue::ALL
        .iter()
        .map(|snippet| (snippet.name, *snippet))
        .collect()
});

impl Snippet {
    pub const fn new(
        name: &'static str,
        prerequisites: &'static [&'static Snippet],
        source: &'static str,
    ) -> Self {
        Snippet {
            name,
            prerequisites,
            source,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Prerequisites this snippet declares directly.
    pub fn prerequisites(&self) -> &'static [&'static Snippet] {
        self.prerequisites
    }

    /// This snippet's own text, without prerequisites.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Looks up a catalogue snippet by name.
    pub fn by_name(name: &str) -> Option<&'static Snippet> {
        BY_NAME.get(name).copied()
    }

    /// The snippet defining a logical type's representation.
    pub fn for_type(logical_type: LogicalType) -> &'static Snippet {
        logical_type.data_type().snippet()
    }

    /// This snippet preceded by its prerequisites, each once.
    pub fn flatten(&'static self) -> Vec<&'static Snippet> {
        Self::flatten_all([self])
    }

    /// Flattens several snippets into one emission order.
    pub fn flatten_all(snippets: impl IntoIterator<Item = &'static Snippet>) -> Vec<&'static Snippet> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for snippet in snippets {
            snippet.visit(&mut seen, &mut order);
        }
        order
    }

    fn visit(
        &'static self,
        seen: &mut HashSet<&'static str>,
        order: &mut Vec<&'static Snippet>,
    ) {
        if !seen.insert(self.name) {
            return;
        }
        for prerequisite in self.prerequisites {
            prerequisite.visit(seen, order);
        }
        order.push(self);
    }

    /// Concatenated source for `snippets` and everything they depend on.
    pub fn render_all(snippets: impl IntoIterator<Item = &'static Snippet>) -> String {
        let order = Self::flatten_all(snippets);
        logwise::debuginternal_sync!(
            "emitting {count} snippets",
            count = order.len()
        );
        order.into_iter().map(Snippet::source).collect()
    }
}

impl Debug for Snippet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snippet")
            .field("name", &self.name)
            .field(
                "prerequisites",
                &self.prerequisites.iter().map(|p| p.name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl PartialEq for Snippet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Snippet {}
