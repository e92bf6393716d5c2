//! In-memory artifact provider standing in for the compiler front end.

use std::sync::{Arc, Mutex};

use hieroglyph::artifacts::{
    AnnotatedAst, ArtifactProvider, AstSnapshot, NameMap, NameMapSnapshot, VirtualFile,
};
use url::Url;

#[derive(Default)]
struct State {
    ast: Option<AstSnapshot>,
    names: Option<NameMapSnapshot>,
    file: Option<VirtualFile>,
    next_fingerprint: u64,
}

/// Serves the same artifacts for every URI.
///
/// Each `set_*` call bumps the fingerprint, the way a rebuild would.
#[derive(Default)]
pub struct FakeProvider {
    state: Mutex<State>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn fingerprint(state: &mut State) -> u64 {
        state.next_fingerprint += 1;
        state.next_fingerprint
    }

    pub fn set_ast(&self, ast: AnnotatedAst) {
        let mut state = self.state.lock().unwrap();
        let fingerprint = Self::fingerprint(&mut state);
        state.ast = Some(AstSnapshot {
            ast: Arc::new(ast),
            fingerprint,
        });
    }

    pub fn set_names(&self, names: NameMap) {
        let mut state = self.state.lock().unwrap();
        let fingerprint = Self::fingerprint(&mut state);
        state.names = Some(NameMapSnapshot {
            names: Arc::new(names),
            fingerprint,
        });
    }

    pub fn set_text(&self, text: &str, version: Option<i32>) {
        self.state.lock().unwrap().file = Some(VirtualFile::new(text, version));
    }

    pub fn clear_ast(&self) {
        self.state.lock().unwrap().ast = None;
    }

    pub fn clear_text(&self) {
        self.state.lock().unwrap().file = None;
    }
}

impl ArtifactProvider for FakeProvider {
    fn annotated_ast(&self, _uri: &Url) -> Option<AstSnapshot> {
        self.state.lock().unwrap().ast.clone()
    }

    fn name_map(&self, _uri: &Url) -> Option<NameMapSnapshot> {
        self.state.lock().unwrap().names.clone()
    }

    fn virtual_file(&self, _uri: &Url) -> Option<VirtualFile> {
        self.state.lock().unwrap().file.clone()
    }
}
