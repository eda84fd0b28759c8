// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Category;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let rows: Vec<Vec<String>> = Category::ALL
            .iter()
            .map(|c| {
                vec![
                    c.id().to_string(),
                    c.label().to_string(),
                    c.icon().to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Label", "Icon"], rows));
    }
    Ok(())
}
