//! Built-in folder themes.
//!
//! Only the `specific` theme carries a per-name icon table; `classic` and
//! `none` resolve purely through computed defaults.

use crate::model::{CloneSource, DefaultIcon, FolderIcon, FolderTheme, FolderThemeName};

/// The built-in folder themes.
pub fn folder_icons() -> Vec<FolderTheme> {
    vec![
        FolderTheme::new(FolderThemeName::Specific, DefaultIcon::new("folder"))
            .root_folder(DefaultIcon::new("folder-root"))
            .icons(specific_icons()),
        FolderTheme::new(FolderThemeName::Classic, DefaultIcon::new("folder"))
            .root_folder(DefaultIcon::new("folder-root")),
        FolderTheme::new(FolderThemeName::None, DefaultIcon::new("folder")),
    ]
}

fn specific_icons() -> Vec<FolderIcon> {
    vec![
        FolderIcon::new("folder-src").folders(["src", "source", "sources"]),
        FolderIcon::new("folder-dist").folders(["dist", "out", "build", "release"]),
        FolderIcon::new("folder-lib").folders(["lib", "libs", "library", "libraries"]),
        FolderIcon::new("folder-test").folders([
            "test",
            "tests",
            "testing",
            "spec",
            "specs",
            "__tests__",
        ]),
        FolderIcon::new("folder-mock")
            .folders(["mock", "mocks", "__mocks__"])
            .clone_of(CloneSource::new("folder-test", "orange-400")),
        FolderIcon::new("folder-node").folders(["node_modules"]),
        FolderIcon::new("folder-bower").folders(["bower_components"]).disabled(),
        FolderIcon::new("folder-javascript").folders(["js", "javascript", "javascripts"]),
        FolderIcon::new("folder-typescript").folders(["ts", "typescript", "typescripts"]),
        FolderIcon::new("folder-css").folders(["css", "style", "styles", "stylesheets"]),
        FolderIcon::new("folder-sass").folders(["sass", "scss"]),
        FolderIcon::new("folder-images").folders([
            "images",
            "image",
            "img",
            "imgs",
            "icons",
            "icon",
            "screenshots",
        ]),
        FolderIcon::new("folder-assets").folders([
            "assets", "asset", "static", "resource", "resources", "res",
        ]),
        FolderIcon::new("folder-fonts").folders(["font", "fonts"]),
        FolderIcon::new("folder-audio").folders(["audio", "sound", "sounds", "music"]),
        FolderIcon::new("folder-video").folders(["video", "videos", "movie", "movies"]),
        FolderIcon::new("folder-animation").folders(["animation", "animations", "anim"]),
        FolderIcon::new("folder-scripts").folders(["script", "scripts"]),
        FolderIcon::new("folder-docs").folders([
            "doc",
            "docs",
            "document",
            "documents",
            "documentation",
        ]),
        FolderIcon::new("folder-examples").folders([
            "demo", "demos", "example", "examples", "sample", "samples",
        ]),
        FolderIcon::new("folder-git").folders([".git", "submodules", ".submodules"]),
        FolderIcon::new("folder-github").folders([".github"]),
        FolderIcon::new("folder-gitlab").folders([".gitlab"]),
        FolderIcon::new("folder-vscode").folders([".vscode", ".vscode-test"]),
        FolderIcon::new("folder-views").folders([
            "view", "views", "template", "templates", "pages",
        ]),
        FolderIcon::new("folder-components").folders(["component", "components", "widgets"]),
        FolderIcon::new("folder-hooks").folders(["hook", "hooks"]),
        FolderIcon::new("folder-context").folders(["context", "contexts"]),
        FolderIcon::new("folder-helper").folders(["helper", "helpers"]),
        FolderIcon::new("folder-utils").folders(["util", "utils", "utility", "utilities"]),
        FolderIcon::new("folder-functions").folders([
            "function",
            "functions",
            "lambda",
            "lambdas",
        ]),
        FolderIcon::new("folder-api").folders(["api", "apis", "restapi"]),
        FolderIcon::new("folder-config").folders([
            "config",
            "configs",
            "configuration",
            "configurations",
            ".config",
        ]),
        FolderIcon::new("folder-constants").folders(["constant", "constants"]),
        FolderIcon::new("folder-content").folders(["content", "contents"]),
        FolderIcon::new("folder-core").folders(["core"]),
        FolderIcon::new("folder-shared").folders(["shared", "common"]),
        FolderIcon::new("folder-types").folders(["types", "typings", "@types", "interfaces"]),
        FolderIcon::new("folder-database")
            .folders(["database", "databases", "db", "sql"])
            .root_folders(["database", "db"]),
        FolderIcon::new("folder-client")
            .folders(["client", "clients"])
            .root_folders(["client", "frontend"]),
        FolderIcon::new("folder-server")
            .folders(["server", "servers"])
            .root_folders(["server", "backend"]),
        FolderIcon::new("folder-app").folders(["app", "apps"]),
        FolderIcon::new("folder-public").folders(["public", "www", "wwwroot"]),
        FolderIcon::new("folder-private").folders(["private"]),
        FolderIcon::new("folder-include").folders(["include", "includes"]),
        FolderIcon::new("folder-upload").folders(["upload", "uploads"]),
        FolderIcon::new("folder-download").folders(["download", "downloads"]),
        FolderIcon::new("folder-tools").folders(["tool", "tools", "devtools"]),
        FolderIcon::new("folder-plugin").folders([
            "plugin", "plugins", "extension", "extensions", "addon", "addons",
        ]),
        FolderIcon::new("folder-middleware").folders(["middleware", "middlewares"]),
        FolderIcon::new("folder-controller").folders([
            "controller",
            "controllers",
            "handler",
            "handlers",
        ]),
        FolderIcon::new("folder-services").folders(["service", "services"]),
        FolderIcon::new("folder-routes").folders(["route", "routes", "router", "routers"]),
        FolderIcon::new("folder-models").folders(["model", "models", "entity", "entities"]),
        FolderIcon::new("folder-layout").folders(["layout", "layouts"]),
        FolderIcon::new("folder-i18n").folders([
            "lang",
            "language",
            "languages",
            "locale",
            "locales",
            "i18n",
            "l10n",
            "translations",
        ]),
        FolderIcon::new("folder-log").folders(["log", "logs"]),
        FolderIcon::new("folder-temp").folders(["temp", "tmp", "cache", ".cache"]),
        FolderIcon::new("folder-secure").folders([
            "secure",
            "security",
            "cert",
            "certs",
            "certificates",
        ]),
        FolderIcon::new("folder-docker").folders(["docker", ".docker"]),
        FolderIcon::new("folder-ci").folders([".circleci", "ci", ".ci"]),
        FolderIcon::new("folder-environment").folders([
            "env",
            "envs",
            "environment",
            "environments",
            ".env",
        ]),
        FolderIcon::new("folder-debug").folders(["debug", "debugging"]),
        FolderIcon::new("folder-packages").folders(["package", "packages"]),
        FolderIcon::new("folder-store").folders(["store", "stores"]),
        FolderIcon::new("folder-redux").folders(["redux"]),
        FolderIcon::new("folder-ngrx").folders(["ngrx", "effects", "reducers", "actions"]),
        FolderIcon::new("folder-angular").folders(["angular", ".angular"]),
        FolderIcon::new("folder-react").folders(["react"]),
        FolderIcon::new("folder-vue").folders(["vue"]),
        FolderIcon::new("folder-rust").folders(["rust"]),
        FolderIcon::new("folder-python").folders(["python", ".venv", "venv", "__pycache__"]),
        FolderIcon::new("folder-php").folders(["php"]),
        FolderIcon::new("folder-java").folders(["java"]),
        FolderIcon::new("folder-kotlin").folders(["kotlin"]),
        FolderIcon::new("folder-go").folders(["go"]),
        FolderIcon::new("folder-migrations").folders(["migration", "migrations"]),
        FolderIcon::new("folder-seeders").folders(["seed", "seeds", "seeders"]),
        FolderIcon::new("folder-gui").folders(["gui", "ui"]),
    ]
}
