//! Source files and their compiler artifacts, built by hand.

use hieroglyph::analysis::ast_file_key;
use hieroglyph::artifacts::{
    AnnotatedAst, AstNode, ContextInfo, Entity, Identifier, IdentifierDetails, ModuleName, Name,
    NameMap, Span,
};
use url::Url;

use super::fake_provider::FakeProvider;

pub fn main_uri() -> Url {
    Url::parse("file:///project/src/Main.hs").unwrap()
}

fn use_site(name: &Name, span: Span) -> AstNode {
    AstNode::new(span).with_identifier(
        Identifier::Name(name.clone()),
        IdentifierDetails::new().with_context(ContextInfo::Use),
    )
}

/// `foo` at line 0, columns 0-3, resolving to an imported function.
///
/// Source: `foo 1`
pub fn load_single_function(provider: &FakeProvider, uri: &Url, version: Option<i32>) {
    let foo = Name::external("foo", 1, ModuleName::new("Data.Foo"));
    let root =
        AstNode::new(Span::new(0, 0, 0, 5)).with_child(use_site(&foo, Span::new(0, 0, 0, 3)));

    provider.set_ast(AnnotatedAst::new().with_file(ast_file_key(uri), root));
    provider.set_names(NameMap::new().with(&foo, Entity::function()));
    provider.set_text("foo 1", version);
}

/// Two lines: `foo x` then `bar`, where `bar` resolves to a data constructor.
///
/// Source:
/// ```text
/// foo x
/// Bar
/// ```
pub fn load_two_lines(provider: &FakeProvider, uri: &Url, version: Option<i32>) {
    let foo = Name::external("foo", 1, ModuleName::new("Data.Foo"));
    let bar = Name::external("Bar", 2, ModuleName::new("Data.Foo"));
    let root = AstNode::new(Span::new(0, 0, 1, 3))
        .with_child(use_site(&foo, Span::new(0, 0, 0, 3)))
        .with_child(use_site(&bar, Span::new(1, 0, 1, 3)));

    provider.set_ast(AnnotatedAst::new().with_file(ast_file_key(uri), root));
    provider.set_names(
        NameMap::new()
            .with(&foo, Entity::function())
            .with(&bar, Entity::DataCon),
    );
    provider.set_text("foo x\nBar\n", version);
}
