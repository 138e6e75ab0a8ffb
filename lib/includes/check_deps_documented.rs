// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Shared by every crate in the workspace through `include!`.
// Cargo runs integration tests from the crate root, so relative paths work.
use std::collections::BTreeSet;
use std::fs;

fn manifest_dependencies() -> BTreeSet<String> {
    let manifest = fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let mut table = toml::from_str::<toml::Table>(&manifest).expect("Cargo.toml must be valid");

    ["dependencies", "build-dependencies", "dev-dependencies"]
        .into_iter()
        .filter_map(|section| match table.remove(section) {
            Some(toml::Value::Table(deps)) => Some(deps.into_iter().map(|(name, _)| name)),
            _ => None,
        })
        .flatten()
        .collect()
}

fn documented_dependencies() -> BTreeSet<String> {
    let markdown = fs::read_to_string("DEPS.md").expect("DEPS.md must exist");
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|name| name.trim().to_string())
        .collect()
}

#[test]
fn check_deps_documented() {
    let listed = manifest_dependencies();
    let documented = documented_dependencies();

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    let stale = documented.difference(&listed).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
