pub const DEFAULT_CONFIG: &str = r#"# sheetgen.toml — skill table generator settings

# Where the generated tables are written. Parent directories are created
# and an existing file is replaced.
output = "./_python/skills.html"

# Optional catalog file (.toml, .yaml, .yml or .json) replacing the built-in
# skill list. Relative paths are resolved against this file.
# Run `sheetgen catalog export` to get a starting point.
# catalog = "skills.toml"

# Table data-id pair the sheet page binds to:
#   "first-second" -> skills-first / skills-second
#   "left-right"   -> skills-left / skills-right
layout = "first-second"

# Emit a full HTML page instead of a fragment.
standalone = false
title = "Skills"
"#;
