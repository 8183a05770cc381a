// Copyright 2025 Kirky.X
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

//! 将已注册的 cube 校验后以 YAML 数据模型输出到标准输出
//!
//! 用法：`cube-export [NAME]`，省略名称时导出全部 cube

use anyhow::{bail, Context};
use sharegraph::analytics::{self, cube::CubeDocument};

fn main() -> anyhow::Result<()> {
    let cubes = match std::env::args().nth(1) {
        Some(name) => match analytics::find_cube(&name) {
            Some(cube) => vec![cube.clone()],
            None => bail!(
                "unknown cube `{}`, expected one of: {}",
                name,
                analytics::cube_names().join(", ")
            ),
        },
        None => analytics::catalog().to_vec(),
    };

    for cube in &cubes {
        cube.validate()
            .with_context(|| format!("cube `{}` is invalid", cube.name))?;
    }

    print!("{}", CubeDocument::new(cubes).to_yaml()?);
    Ok(())
}
