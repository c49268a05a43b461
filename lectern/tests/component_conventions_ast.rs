use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{File, Item, UseTree, Visibility};

const FORBIDDEN_COUPLING: [&str; 4] =
    ["crate::app::", "crate::routers::", "crate::store", "crate::widgets::"];

const FORBIDDEN_SIDE_EFFECTS: [&str; 6] = [
    "log::",
    "std::fs::",
    "Task::",
    "iced::Task",
    "Subscription",
    "Instant::now",
];

#[test]
fn given_primitive_components_when_validating_conventions_then_all_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let primitive_dir = manifest_dir.join("src/components/primitive");
    let mod_rs = primitive_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let declared = declared_modules(&mod_rs, &mut violations);
    let on_disk = file_modules(&primitive_dir, &mut violations);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared modules {declared:?} do not match files {on_disk:?}",
            mod_rs.display(),
        ));
    }

    for module in &declared {
        let file_path = primitive_dir.join(format!("{module}.rs"));
        validate_component_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

fn parse(path: &Path) -> (String, File) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    });
    (source, file)
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let (_, file) = parse(mod_rs);
    let mut declared = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module '{}' must be declared as pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    declared
}

fn file_modules(dir: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut modules = BTreeSet::new();

    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();

        if path.is_dir() {
            violations.push(format!(
                "{}: nested component directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            modules.insert(stem);
        }
    }

    modules
}

fn validate_component_file(file_path: &Path, violations: &mut Vec<String>) {
    let (source, file) = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in FORBIDDEN_COUPLING {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: primitives must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in FORBIDDEN_SIDE_EFFECTS {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    let mut event_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }
    // Purely presentational components may emit nothing.
    if event_names.len() > 1 {
        violations.push(format!(
            "{}: expected at most one *Event contract, found {}",
            file_path.display(),
            event_names.len()
        ));
    }

    for name in props_names.iter().chain(&event_names) {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();

    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars).collect::<String>()
                },
                None => String::new(),
            }
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
