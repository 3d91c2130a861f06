//! Built-in language icon definitions.
//!
//! Identifiers follow the editor-style language ids (`typescript`,
//! `shellscript`, `javascriptreact`, ...).

use crate::model::{CloneSource, IconPack, LanguageIcon};

/// The built-in language icon table.
pub fn language_icons() -> Vec<LanguageIcon> {
    vec![
        LanguageIcon::new("javascript").ids(["javascript"]),
        LanguageIcon::new("typescript").ids(["typescript"]),
        LanguageIcon::new("react").ids(["javascriptreact"]),
        LanguageIcon::new("react_ts").ids(["typescriptreact"]),
        LanguageIcon::new("json").ids(["json", "jsonc", "json5"]),
        LanguageIcon::new("html").ids(["html"]),
        LanguageIcon::new("css").ids(["css"]),
        LanguageIcon::new("sass").ids(["scss", "sass"]),
        LanguageIcon::new("less").ids(["less"]),
        LanguageIcon::new("markdown").ids(["markdown"]),
        LanguageIcon::new("yaml").ids(["yaml"]),
        LanguageIcon::new("xml").ids(["xml", "xsl"]),
        LanguageIcon::new("toml").ids(["toml"]),
        LanguageIcon::new("python").ids(["python"]),
        LanguageIcon::new("rust").ids(["rust"]),
        LanguageIcon::new("go").ids(["go"]),
        LanguageIcon::new("java").ids(["java"]),
        LanguageIcon::new("kotlin").ids(["kotlin"]),
        LanguageIcon::new("c").ids(["c"]),
        LanguageIcon::new("cpp").ids(["cpp"]),
        LanguageIcon::new("csharp").ids(["csharp"]),
        LanguageIcon::new("fsharp").ids(["fsharp"]),
        LanguageIcon::new("ruby").ids(["ruby"]),
        LanguageIcon::new("php").ids(["php"]),
        LanguageIcon::new("swift").ids(["swift"]),
        LanguageIcon::new("dart").ids(["dart"]),
        LanguageIcon::new("lua").ids(["lua"]),
        LanguageIcon::new("roblox")
            .ids(["luau"])
            .packs([IconPack::Roblox])
            .clone_of(CloneSource::new("lua", "blue-400")),
        LanguageIcon::new("perl").ids(["perl", "perl6"]),
        LanguageIcon::new("r").ids(["r"]),
        LanguageIcon::new("scala").ids(["scala"]),
        LanguageIcon::new("haskell").ids(["haskell"]),
        LanguageIcon::new("elixir").ids(["elixir"]),
        LanguageIcon::new("erlang").ids(["erlang"]),
        LanguageIcon::new("clojure").ids(["clojure"]),
        LanguageIcon::new("groovy").ids(["groovy"]),
        LanguageIcon::new("julia").ids(["julia"]),
        LanguageIcon::new("zig").ids(["zig"]),
        LanguageIcon::new("objective-c").ids(["objective-c", "objective-cpp"]),
        LanguageIcon::new("vb").ids(["vb"]),
        LanguageIcon::new("coffee").ids(["coffeescript"]),
        LanguageIcon::new("handlebars").ids(["handlebars"]),
        LanguageIcon::new("pug").ids(["jade"]),
        LanguageIcon::new("console").ids(["shellscript", "bat"]),
        LanguageIcon::new("powershell").ids(["powershell"]),
        LanguageIcon::new("database").ids(["sql"]),
        LanguageIcon::new("graphql").ids(["graphql"]),
        LanguageIcon::new("docker").ids(["dockerfile"]),
        LanguageIcon::new("vue").ids(["vue"]),
        LanguageIcon::new("vue-html")
            .ids(["vue-html"])
            .clone_of(CloneSource::new("vue", "green-300")),
        LanguageIcon::new("svelte").ids(["svelte"]),
        LanguageIcon::new("astro").ids(["astro"]),
        LanguageIcon::new("terraform").ids(["terraform"]),
        LanguageIcon::new("prisma").ids(["prisma"]),
        LanguageIcon::new("proto").ids(["proto3", "proto"]),
        LanguageIcon::new("solidity").ids(["solidity"]),
        LanguageIcon::new("diff").ids(["diff"]),
        LanguageIcon::new("git").ids(["git-commit", "git-rebase", "ignore"]),
        LanguageIcon::new("tex").ids(["latex", "tex", "bibtex"]),
        LanguageIcon::new("jupyter").ids(["jupyter"]),
        LanguageIcon::new("haml").ids(["haml"]).disabled(),
    ]
}
