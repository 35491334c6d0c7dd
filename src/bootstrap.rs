// Copyright 2026 kvbridge contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// .env bootstrap for the init command

use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::path::Path;

const ENV_TEMPLATE: &str = ".env.example";
const ENV_FILE: &str = ".env";

/// Create `.env` from the `.env.example` template in the working directory.
///
/// Refuses to overwrite an existing `.env` unless `force` is set.
pub fn init_env(force: bool) -> Result<String> {
    init_env_in(Path::new("."), force)
}

fn init_env_in(dir: &Path, force: bool) -> Result<String> {
    let src = dir.join(ENV_TEMPLATE);
    let dst = dir.join(ENV_FILE);

    if dst.exists() && !force {
        bail!("{ENV_FILE} already exists. Use --force to overwrite.");
    }

    match std::fs::copy(&src, &dst) {
        Ok(_) => Ok(format!("Created {ENV_FILE} from {ENV_TEMPLATE}")),
        Err(e) if e.kind() == ErrorKind::NotFound => bail!("Source {ENV_TEMPLATE} not found"),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to copy {ENV_TEMPLATE} to {ENV_FILE}"))
        }
    }
}
