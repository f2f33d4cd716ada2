// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Shader program assembly.

Program assembly has two phases.  While *declaring*, code generators register attributes, append
vertex-stage source and queue initializers on a [`ShaderBuilder`].  Once the program is linked, every
initializer runs exactly once against a [`ShaderProgram`], which can resolve attribute locations and
holds the program's vertex input binders.

[`ProgramBuilder`] and [`LinkedProgram`] are this crate's implementation of the two phases.

```
use vertex_inputs::builder::{ProgramBuilder, ShaderBuilder};
use vertex_inputs::gl::AttributeLocation;
use vertex_inputs::source::Identifier;

let mut builder = ProgramBuilder::new();
builder.add_attribute("vec3", Identifier::new("aPosition").unwrap());
builder.add_vertex_code("void main() { gl_Position = vec4(aPosition, 1.0); }\n".to_string());
assert!(builder.vertex_source().contains("in highp vec3 aPosition;"));

let program = builder.link(|name| (name == "aPosition").then_some(AttributeLocation(0)));
assert_eq!(program.attribute_location("aPosition"), Some(AttributeLocation(0)));
```
*/

use crate::binder::VertexInputBinders;
use crate::gl::AttributeLocation;
use crate::snippets::Snippet;
use crate::source::Identifier;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Deferred work that runs once the program is linked.
pub type Initializer = Box<dyn FnOnce(&mut dyn ShaderProgram)>;

/// Index of an attribute in a builder's attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeHandle(pub usize);

/// Everything one named vertex input contributes to a program.
pub struct InputDeclaration {
    pub name: Identifier,
    /// `(type name, attribute name)` for each attribute, in order.
    pub attributes: Vec<(&'static str, Identifier)>,
    pub vertex_code: String,
    pub initializer: Initializer,
}

/// The declaring phase.
pub trait ShaderBuilder {
    /// Declares a `highp` vertex attribute of the given type.
    fn add_attribute(&mut self, type_name: &'static str, name: Identifier) -> AttributeHandle;

    /// Appends verbatim source to the vertex stage.
    fn add_vertex_code(&mut self, code: String);

    fn add_initializer(&mut self, initializer: Initializer);

    /// Declares a named input.  Whatever an earlier input of the same name declared (attributes,
    /// code and initializer) is withdrawn first, so the last definition wins.
    fn add_input(&mut self, input: InputDeclaration);
}

/// A linked program, as initializers see it.
pub trait ShaderProgram {
    /// `None` when the program has no active attribute by that name.
    fn attribute_location(&self, name: &str) -> Option<AttributeLocation>;

    fn vertex_input_binders_mut(&mut self) -> &mut VertexInputBinders;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    type_name: &'static str,
    name: Identifier,
    /// The input that declared this, if any.
    owner: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct VertexCode {
    code: String,
    owner: Option<Identifier>,
}

struct PendingInitializer {
    run: Initializer,
    owner: Option<Identifier>,
}

#[derive(Default)]
pub struct ProgramBuilder {
    attributes: Vec<Attribute>,
    snippets: Vec<&'static Snippet>,
    vertex_code: Vec<VertexCode>,
    initializers: Vec<PendingInitializer>,
}

const VERTEX_HEADER: &str = "#version 300 es\nprecision highp float;\nprecision highp int;\n";

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a catalogue snippet (and its prerequisites) to the vertex stage.
    ///
    /// Snippets are emitted once each, ahead of attribute declarations and code.
    pub fn add_vertex_snippet(&mut self, snippet: &'static Snippet) {
        self.snippets.push(snippet);
    }

    /// Declared attributes as `(type name, name)`, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &Identifier)> {
        self.attributes.iter().map(|a| (a.type_name, &a.name))
    }

    /// Vertex code blocks, in the order they'll be emitted.
    pub fn vertex_code(&self) -> impl Iterator<Item = &str> {
        self.vertex_code.iter().map(|c| c.code.as_str())
    }

    pub fn initializer_count(&self) -> usize {
        self.initializers.len()
    }

    /// The assembled vertex stage: header, snippets, attribute declarations, then code.
    pub fn vertex_source(&self) -> String {
        let mut source = String::from(VERTEX_HEADER);
        source.push_str(&Snippet::render_all(self.snippets.iter().copied()));
        for attribute in &self.attributes {
            source.push_str("in highp ");
            source.push_str(attribute.type_name);
            source.push(' ');
            source.push_str(attribute.name.as_str());
            source.push_str(";\n");
        }
        for code in &self.vertex_code {
            source.push_str(&code.code);
        }
        source
    }

    /**
    Finishes declaring.

    `resolve` is asked once for the location of each declared attribute; then every initializer runs,
    in registration order, against the linked program.
    */
    pub fn link(self, resolve: impl Fn(&str) -> Option<AttributeLocation>) -> LinkedProgram {
        let locations = self
            .attributes
            .iter()
            .map(|a| (a.name.as_str().to_string(), resolve(a.name.as_str())))
            .collect();
        let mut program = LinkedProgram {
            locations,
            binders: VertexInputBinders::new(),
        };
        logwise::trace_sync!(
            "linking program with {attributes} attributes, {initializers} initializers",
            attributes = self.attributes.len(),
            initializers = self.initializers.len()
        );
        for initializer in self.initializers {
            (initializer.run)(&mut program);
        }
        program
    }
}

impl ProgramBuilder {
    fn declare(
        &mut self,
        type_name: &'static str,
        name: Identifier,
        owner: Option<Identifier>,
    ) -> AttributeHandle {
        if let Some(index) = self.attributes.iter().position(|a| a.name == name) {
            logwise::warn_sync!(
                "redeclaring attribute {name}",
                name = name.as_str().to_string()
            );
            let attribute = &mut self.attributes[index];
            attribute.type_name = type_name;
            attribute.owner = owner;
            return AttributeHandle(index);
        }
        self.attributes.push(Attribute {
            type_name,
            name,
            owner,
        });
        AttributeHandle(self.attributes.len() - 1)
    }

    /// Drops everything `input` declared.  Returns whether there was anything.
    fn withdraw(&mut self, input: &Identifier) -> bool {
        let owned = |owner: &Option<Identifier>| owner.as_ref() == Some(input);
        let before = self.attributes.len() + self.vertex_code.len() + self.initializers.len();
        self.attributes.retain(|a| !owned(&a.owner));
        self.vertex_code.retain(|c| !owned(&c.owner));
        self.initializers.retain(|i| !owned(&i.owner));
        before != self.attributes.len() + self.vertex_code.len() + self.initializers.len()
    }
}

impl ShaderBuilder for ProgramBuilder {
    fn add_attribute(&mut self, type_name: &'static str, name: Identifier) -> AttributeHandle {
        self.declare(type_name, name, None)
    }

    fn add_vertex_code(&mut self, code: String) {
        self.vertex_code.push(VertexCode { code, owner: None });
    }

    fn add_initializer(&mut self, initializer: Initializer) {
        self.initializers.push(PendingInitializer {
            run: initializer,
            owner: None,
        });
    }

    fn add_input(&mut self, input: InputDeclaration) {
        let InputDeclaration {
            name,
            attributes,
            vertex_code,
            initializer,
        } = input;
        if self.withdraw(&name) {
            logwise::warn_sync!(
                "redefining vertex input {name}",
                name = name.as_str().to_string()
            );
        }
        for (type_name, attribute) in attributes {
            self.declare(type_name, attribute, Some(name.clone()));
        }
        self.vertex_code.push(VertexCode {
            code: vertex_code,
            owner: Some(name.clone()),
        });
        self.initializers.push(PendingInitializer {
            run: initializer,
            owner: Some(name),
        });
    }
}

impl Debug for ProgramBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramBuilder")
            .field("attributes", &self.attributes)
            .field("snippets", &self.snippets)
            .field("vertex_code", &self.vertex_code)
            .field("initializers", &self.initializers.len())
            .finish()
    }
}

/// A program after linking: resolved attribute locations and the binders its initializers built.
#[derive(Debug, Clone, Default)]
pub struct LinkedProgram {
    locations: HashMap<String, Option<AttributeLocation>>,
    binders: VertexInputBinders,
}

impl LinkedProgram {
    pub fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
        self.locations.get(name).copied().flatten()
    }

    pub fn binders(&self) -> &VertexInputBinders {
        &self.binders
    }

    pub fn binder(&self, name: &str) -> Option<&crate::binder::VertexInputBinder> {
        self.binders.get(name)
    }
}

impl ShaderProgram for LinkedProgram {
    fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
        LinkedProgram::attribute_location(self, name)
    }

    fn vertex_input_binders_mut(&mut self) -> &mut VertexInputBinders {
        &mut self.binders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::catalogue;
    use std::cell::Cell;
    use std::rc::Rc;

    fn id(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn source_order() {
        let mut b = ProgramBuilder::new();
        b.add_vertex_code("void main() {}\n".to_string());
        b.add_attribute("uvec4", id("aX0"));
        b.add_vertex_snippet(&catalogue::UINT8);
        b.add_vertex_snippet(&catalogue::UINT16);
        let source = b.vertex_source();
        assert!(source.starts_with("#version 300 es\n"));
        let uint64 = source.find("struct uint64_t").unwrap();
        let uint8 = source.find("struct uint8_t").unwrap();
        let uint16 = source.find("struct uint16_t").unwrap();
        let attribute = source.find("in highp uvec4 aX0;").unwrap();
        let main = source.find("void main()").unwrap();
        assert!(uint64 < uint8 && uint8 < uint16 && uint16 < attribute && attribute < main);
        assert_eq!(source.matches("struct uint64_t").count(), 1);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn redeclaring_keeps_one_attribute() {
        let mut b = ProgramBuilder::new();
        let first = b.add_attribute("vec4", id("aX0"));
        b.add_attribute("vec2", id("aY0"));
        let again = b.add_attribute("vec3", id("aX0"));
        assert_eq!(first, again);
        let attributes: Vec<_> = b.attributes().map(|(t, n)| (t, n.as_str())).collect();
        assert_eq!(attributes, [("vec3", "aX0"), ("vec2", "aY0")]);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn initializers_run_once_in_order() {
        let runs = Rc::new(Cell::new(0));
        let mut b = ProgramBuilder::new();
        b.add_attribute("float", id("aA0"));
        for expected in 0..3 {
            let runs = runs.clone();
            b.add_initializer(Box::new(move |program: &mut dyn ShaderProgram| {
                assert_eq!(runs.get(), expected);
                assert_eq!(program.attribute_location("aA0"), Some(AttributeLocation(7)));
                assert_eq!(program.attribute_location("aMissing"), None);
                runs.set(runs.get() + 1);
            }));
        }
        assert_eq!(b.initializer_count(), 3);
        let _program = b.link(|_| Some(AttributeLocation(7)));
        assert_eq!(runs.get(), 3);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn redefined_inputs_replace_their_declarations() {
        let runs = Rc::new(Cell::new(0));
        let mut b = ProgramBuilder::new();
        b.add_attribute("float", id("aShared0"));
        b.add_vertex_code("//shared\n".to_string());
        let declaration = |attributes: Vec<(&'static str, Identifier)>, code: &str, tag: u32| {
            let runs = runs.clone();
            InputDeclaration {
                name: id("X"),
                attributes,
                vertex_code: code.to_string(),
                initializer: Box::new(move |_program: &mut dyn ShaderProgram| runs.set(tag)),
            }
        };
        b.add_input(declaration(
            vec![("uvec4", id("aX0")), ("uvec4", id("aX1"))],
            "//first\n",
            1,
        ));
        b.add_input(declaration(vec![("uvec2", id("aX0"))], "//second\n", 2));

        let attributes: Vec<_> = b.attributes().map(|(t, n)| (t, n.as_str())).collect();
        assert_eq!(attributes, [("float", "aShared0"), ("uvec2", "aX0")]);
        let code: Vec<_> = b.vertex_code().collect();
        assert_eq!(code, ["//shared\n", "//second\n"]);
        assert_eq!(b.initializer_count(), 1);
        let _program = b.link(|_| None);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn inactive_attributes_resolve_to_none() {
        let mut b = ProgramBuilder::new();
        b.add_attribute("float", id("aUnused0"));
        let program = b.link(|_| None);
        assert_eq!(program.attribute_location("aUnused0"), None);
        assert!(program.binders().is_empty());
    }
}
