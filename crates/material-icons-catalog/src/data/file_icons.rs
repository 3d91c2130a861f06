//! Built-in file icon definitions.
//!
//! Order matters: when several entries claim the same key, resolution
//! returns the first one, so generic language entries come before the
//! tooling entries whose patterns sweep in broad extension sets.

use crate::model::{CloneSource, DefaultIcon, FileIcon, FileIconSet, IconPack};
use crate::patterns::FileNamePattern;

/// The built-in file icon table.
pub fn file_icons() -> FileIconSet {
    FileIconSet {
        default_icon: DefaultIcon::new("file"),
        icons: vec![
            // Plain documents and media
            FileIcon::new("document").extensions(["txt", "text", "rtf"]),
            FileIcon::new("markdown").extensions(["md", "markdown", "mdown", "mdx"]),
            FileIcon::new("pdf").extensions(["pdf"]),
            FileIcon::new("image").extensions([
                "png", "jpg", "jpeg", "gif", "ico", "bmp", "webp", "avif", "tiff", "heic",
            ]),
            FileIcon::new("svg").extensions(["svg"]),
            FileIcon::new("audio").extensions(["mp3", "wav", "ogg", "flac", "aac", "m4a", "opus"]),
            FileIcon::new("video").extensions(["mp4", "mov", "avi", "mkv", "webm", "flv"]),
            FileIcon::new("zip").extensions([
                "zip", "rar", "7z", "tar", "gz", "tgz", "bz2", "xz", "zst",
            ]),
            FileIcon::new("font").extensions(["ttf", "otf", "woff", "woff2", "eot"]),
            FileIcon::new("exe").extensions(["exe", "msi", "dll"]),
            FileIcon::new("table").extensions(["csv", "tsv", "psv"]),
            FileIcon::new("word").extensions(["doc", "docx", "odt"]),
            FileIcon::new("powerpoint").extensions(["ppt", "pptx", "odp"]),
            FileIcon::new("excel").extensions(["xls", "xlsx", "ods"]),
            FileIcon::new("diff").extensions(["diff", "patch"]),
            FileIcon::new("log").extensions(["log"]),
            FileIcon::new("lock").extensions(["lock"]),
            // Web platform
            FileIcon::new("html").extensions(["html", "htm", "xhtml"]),
            FileIcon::new("css").extensions(["css"]),
            FileIcon::new("sass").extensions(["scss", "sass"]),
            FileIcon::new("less").extensions(["less"]),
            FileIcon::new("stylus").extensions(["styl"]),
            FileIcon::new("javascript").extensions(["js", "mjs", "cjs"]),
            FileIcon::new("typescript").extensions(["ts", "mts", "cts"]),
            FileIcon::new("typescript-def")
                .light()
                .extensions(["d.ts", "d.mts", "d.cts"]),
            FileIcon::new("react").extensions(["jsx"]),
            FileIcon::new("react_ts").extensions(["tsx"]),
            FileIcon::new("vue").extensions(["vue"]),
            FileIcon::new("svelte").extensions(["svelte"]),
            FileIcon::new("astro").extensions(["astro"]),
            FileIcon::new("json").extensions(["json", "jsonc", "json5", "jsonl"]),
            FileIcon::new("yaml").extensions(["yaml", "yml"]),
            FileIcon::new("xml").extensions(["xml", "xsl", "xslt", "plist"]),
            FileIcon::new("toml")
                .extensions(["toml"])
                .names(["Cargo.toml"]),
            FileIcon::new("graphql")
                .extensions(["graphql", "gql"])
                .names([".graphqlconfig"]),
            FileIcon::new("http").extensions(["http", "rest"]),
            // Languages
            FileIcon::new("python").extensions(["py", "pyi", "pyw"]),
            FileIcon::new("python-misc").names([
                "requirements.txt",
                "pyproject.toml",
                "setup.py",
                "setup.cfg",
                "Pipfile",
                "Pipfile.lock",
            ]),
            FileIcon::new("jupyter").extensions(["ipynb"]),
            FileIcon::new("rust").extensions(["rs"]),
            FileIcon::new("go").extensions(["go"]),
            FileIcon::new("go-mod").names(["go.mod", "go.sum", "go.work"]),
            FileIcon::new("java").extensions(["java", "jsp"]),
            FileIcon::new("javaclass").extensions(["class", "jar"]),
            FileIcon::new("kotlin").extensions(["kt", "kts"]),
            FileIcon::new("c").extensions(["c", "i"]),
            FileIcon::new("h").extensions(["h"]),
            FileIcon::new("cpp").extensions(["cpp", "cc", "cxx", "c++"]),
            FileIcon::new("hpp").extensions(["hpp", "hh", "hxx"]),
            FileIcon::new("csharp").extensions(["cs", "csx"]),
            FileIcon::new("fsharp").extensions(["fs", "fsx", "fsi"]),
            FileIcon::new("vb").extensions(["vb"]),
            FileIcon::new("ruby").extensions(["rb", "ru", "erb"]),
            FileIcon::new("gemfile").names(["Gemfile", "Gemfile.lock"]),
            FileIcon::new("rubocop").names([".rubocop.yml", ".rubocop_todo.yml"]),
            FileIcon::new("php").extensions(["php"]),
            FileIcon::new("composer").names(["composer.json", "composer.lock"]),
            FileIcon::new("laravel")
                .extensions(["blade.php"])
                .names(["artisan"]),
            FileIcon::new("swift").extensions(["swift"]).names(["Package.swift"]),
            FileIcon::new("dart").extensions(["dart"]).names(["pubspec.yaml"]),
            FileIcon::new("lua").extensions(["lua"]).names([".luacheckrc"]),
            FileIcon::new("perl").extensions(["pl", "pm"]),
            FileIcon::new("r").extensions(["r", "rmd"]),
            FileIcon::new("scala").extensions(["scala", "sc"]),
            FileIcon::new("haskell").extensions(["hs", "lhs"]),
            FileIcon::new("elixir").extensions(["ex", "exs"]),
            FileIcon::new("erlang").extensions(["erl", "hrl"]),
            FileIcon::new("clojure").extensions(["clj", "cljs", "cljc", "edn"]),
            FileIcon::new("groovy").extensions(["groovy", "gvy"]),
            FileIcon::new("julia").extensions(["jl"]),
            FileIcon::new("zig").extensions(["zig"]),
            FileIcon::new("nim").extensions(["nim", "nims"]),
            FileIcon::new("ocaml").extensions(["ml", "mli"]),
            FileIcon::new("coffee").extensions(["coffee"]),
            FileIcon::new("objective-c").extensions(["m", "mm"]),
            FileIcon::new("assembly").extensions(["asm", "s"]),
            FileIcon::new("wasm").extensions(["wasm", "wat"]),
            FileIcon::new("tex").extensions(["tex", "cls", "sty", "bib"]),
            FileIcon::new("console").extensions(["sh", "bash", "zsh", "fish", "ksh", "csh"]),
            FileIcon::new("powershell").extensions(["ps1", "psm1", "psd1"]),
            FileIcon::new("bat").extensions(["bat", "cmd"]),
            FileIcon::new("database").extensions(["sql", "db", "sqlite", "pgsql"]),
            FileIcon::new("prisma").extensions(["prisma"]),
            FileIcon::new("proto").extensions(["proto"]),
            FileIcon::new("solidity").extensions(["sol"]),
            FileIcon::new("terraform").extensions(["tf", "tfvars", "tfstate"]),
            // Templating
            FileIcon::new("handlebars").extensions(["hbs", "handlebars"]),
            FileIcon::new("pug").extensions(["pug", "jade"]),
            FileIcon::new("ejs").extensions(["ejs"]),
            FileIcon::new("twig").extensions(["twig"]),
            FileIcon::new("liquid").extensions(["liquid"]),
            FileIcon::new("smarty").extensions(["tpl"]),
            // Tests and maps
            FileIcon::new("test-js").extensions(["test.js", "spec.js", "test.mjs", "spec.mjs"]),
            FileIcon::new("test-ts")
                .extensions(["test.ts", "spec.ts", "test.tsx", "spec.tsx"])
                .clone_of(CloneSource::new("test-js", "blue-400")),
            FileIcon::new("javascript-map")
                .extensions(["js.map", "mjs.map", "cjs.map"])
                .clone_of(CloneSource::new("javascript", "gray-500")),
            FileIcon::new("css-map")
                .extensions(["css.map"])
                .clone_of(CloneSource::new("css", "gray-500")),
            // Project metadata
            FileIcon::new("readme").names(["README.md", "readme.md", "README", "README.txt"]),
            FileIcon::new("changelog").names([
                "CHANGELOG.md",
                "changelog.md",
                "CHANGELOG",
                "HISTORY.md",
            ]),
            FileIcon::new("certificate").names([
                "LICENSE",
                "LICENCE",
                "LICENSE.md",
                "LICENSE.txt",
                "COPYING",
            ]),
            FileIcon::new("key").extensions(["key", "pem", "crt", "cer", "pub"]),
            FileIcon::new("authors").names(["AUTHORS", "AUTHORS.md", "CODEOWNERS"]),
            FileIcon::new("todo").names(["TODO", "TODO.md"]),
            FileIcon::new("conduct").names(["CODE_OF_CONDUCT.md"]),
            FileIcon::new("contributing").names(["CONTRIBUTING.md"]),
            // Version control
            FileIcon::new("git")
                .pattern("gitignore", FileNamePattern::Dotfile)
                .names([".gitattributes", ".gitmodules", ".gitconfig", ".gitkeep"]),
            FileIcon::new("gitlab").names([".gitlab-ci.yml"]),
            // Build systems
            FileIcon::new("makefile")
                .extensions(["mk"])
                .names(["Makefile", "makefile", "GNUmakefile"]),
            FileIcon::new("cmake")
                .extensions(["cmake"])
                .names(["CMakeLists.txt", "CMakeCache.txt"]),
            FileIcon::new("gradle")
                .extensions(["gradle"])
                .names(["build.gradle", "settings.gradle", "gradlew", "gradle.properties"]),
            FileIcon::new("maven").names(["pom.xml"]),
            FileIcon::new("bazel").names(["BUILD.bazel", "WORKSPACE", ".bazelrc"]),
            // Node ecosystem
            FileIcon::new("nodejs").names([
                "package.json",
                "package-lock.json",
                ".nvmrc",
                ".node-version",
            ]),
            FileIcon::new("npm").names([".npmrc", ".npmignore", "npm-shrinkwrap.json"]),
            FileIcon::new("yarn").names(["yarn.lock", ".yarnrc", ".yarnrc.yml", ".yarnclean"]),
            FileIcon::new("pnpm").names([
                "pnpm-lock.yaml",
                "pnpm-workspace.yaml",
                ".pnpmfile.cjs",
            ]),
            FileIcon::new("bun").names(["bun.lockb", "bun.lock", "bunfig.toml"]),
            FileIcon::new("deno").names(["deno.json", "deno.jsonc", "deno.lock"]),
            FileIcon::new("tsconfig").names([
                "tsconfig.json",
                "tsconfig.app.json",
                "tsconfig.base.json",
                "tsconfig.build.json",
                "tsconfig.spec.json",
            ]),
            FileIcon::new("jsconfig")
                .names(["jsconfig.json"])
                .clone_of(CloneSource::new("tsconfig", "yellow-500")),
            // Tooling configs
            FileIcon::new("eslint")
                .pattern("eslint", FileNamePattern::Cosmiconfig)
                .names([".eslintignore", "eslint.config.js", "eslint.config.mjs"]),
            FileIcon::new("prettier")
                .pattern("prettier", FileNamePattern::Cosmiconfig)
                .names([".prettierignore", "prettier.config.js"]),
            FileIcon::new("stylelint")
                .pattern("stylelint", FileNamePattern::Cosmiconfig)
                .names([".stylelintignore"]),
            FileIcon::new("babel")
                .pattern("babel", FileNamePattern::Cosmiconfig)
                .names(["babel.config.js", "babel.config.json", ".babelrc.js"]),
            FileIcon::new("jest")
                .pattern("jest", FileNamePattern::Cosmiconfig)
                .names(["jest.config.js", "jest.config.ts", "jest.setup.js"]),
            FileIcon::new("nodemon").pattern("nodemon", FileNamePattern::Cosmiconfig),
            FileIcon::new("commitlint").pattern("commitlint", FileNamePattern::Cosmiconfig),
            FileIcon::new("husky").pattern("husky", FileNamePattern::Cosmiconfig),
            FileIcon::new("lint-staged").pattern("lintstaged", FileNamePattern::Cosmiconfig),
            FileIcon::new("semantic-release").pattern("releaserc", FileNamePattern::Dotfile),
            FileIcon::new("editorconfig").pattern("editorconfig", FileNamePattern::Dotfile),
            FileIcon::new("browserlist").names([".browserslistrc", "browserslist"]),
            FileIcon::new("vite").names([
                "vite.config.js",
                "vite.config.ts",
                "vite.config.mjs",
                "vite.config.mts",
            ]),
            FileIcon::new("vitest")
                .pattern("vitest", FileNamePattern::NodeEcosystem)
                .names([
                    "vitest.config.js",
                    "vitest.config.ts",
                    "vitest.config.mts",
                    "vitest.workspace.ts",
                ]),
            FileIcon::new("webpack").names([
                "webpack.config.js",
                "webpack.config.ts",
                "webpack.mix.js",
            ]),
            FileIcon::new("rollup").names([
                "rollup.config.js",
                "rollup.config.ts",
                "rollup.config.mjs",
            ]),
            FileIcon::new("tailwindcss")
                .pattern("tailwind", FileNamePattern::Configuration)
                .names([
                    "tailwind.config.js",
                    "tailwind.config.cjs",
                    "tailwind.config.mjs",
                    "tailwind.config.ts",
                ]),
            FileIcon::new("postcss").pattern("postcss", FileNamePattern::Cosmiconfig),
            FileIcon::new("storybook")
                .extensions(["stories.js", "stories.ts", "stories.mdx"])
                .pattern("storybook", FileNamePattern::Ecmascript),
            FileIcon::new("tslint").names(["tslint.json"]).disabled(),
            // Environments and settings
            FileIcon::new("tune")
                .extensions(["env"])
                .pattern("env", FileNamePattern::Dotfile)
                .names([
                    ".env.local",
                    ".env.development",
                    ".env.production",
                    ".env.test",
                    ".env.example",
                ]),
            FileIcon::new("settings").extensions([
                "ini", "cfg", "cnf", "conf", "properties", "prop",
            ]),
            // Infrastructure
            FileIcon::new("docker")
                .extensions(["dockerfile"])
                .pattern("dockerignore", FileNamePattern::Dotfile)
                .names([
                    "Dockerfile",
                    "docker-compose.yml",
                    "docker-compose.yaml",
                    "compose.yml",
                    "compose.yaml",
                ]),
            FileIcon::new("vagrant").names(["Vagrantfile"]),
            FileIcon::new("jenkins").extensions(["jenkinsfile"]).names(["Jenkinsfile"]),
            FileIcon::new("travis").names([".travis.yml"]),
            FileIcon::new("azure-pipelines").names([
                "azure-pipelines.yml",
                "azure-pipelines.yaml",
            ]),
            FileIcon::new("nginx").extensions(["nginx"]).names(["nginx.conf"]),
            FileIcon::new("apache").names([".htaccess", "httpd.conf"]),
            FileIcon::new("netlify").names(["netlify.toml"]),
            FileIcon::new("vercel").names(["vercel.json", ".vercelignore"]),
            FileIcon::new("firebase").names(["firebase.json", ".firebaserc"]),
            FileIcon::new("heroku").names(["Procfile"]),
            FileIcon::new("renovate").names(["renovate.json", ".renovaterc"]),
            FileIcon::new("dependabot")
                .pattern("dependabot", FileNamePattern::Yaml)
                .names(["dependabot.yml", "dependabot.yaml"]),
            FileIcon::new("editor").extensions(["code-workspace"]).names([".vscodeignore"]),
            FileIcon::new("cargo-lock")
                .light()
                .names(["Cargo.lock"])
                .clone_of(CloneSource::new("toml", "gray-500").with_light_color("gray-700")),
            // Framework packs
            FileIcon::new("angular")
                .names(["angular.json", ".angular-cli.json", "angular-cli.json"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-component")
                .extensions(["component.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-service")
                .extensions(["service.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-directive")
                .extensions(["directive.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-guard")
                .extensions(["guard.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-pipe")
                .extensions(["pipe.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("angular-resolver")
                .extensions(["resolver.ts"])
                .packs([IconPack::Angular, IconPack::Ngrx]),
            FileIcon::new("ngrx-actions")
                .extensions(["actions.ts"])
                .packs([IconPack::Ngrx]),
            FileIcon::new("ngrx-reducer")
                .extensions(["reducer.ts"])
                .packs([IconPack::Ngrx]),
            FileIcon::new("ngrx-effects")
                .extensions(["effects.ts"])
                .packs([IconPack::Ngrx]),
            FileIcon::new("ngrx-selectors")
                .extensions(["selectors.ts"])
                .packs([IconPack::Ngrx]),
            FileIcon::new("ngrx-entity")
                .extensions(["entity.ts"])
                .packs([IconPack::Ngrx]),
            FileIcon::new("nest")
                .names(["nest-cli.json", ".nest-cli.json"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-controller")
                .extensions(["controller.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-service")
                .extensions(["service.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-module")
                .extensions(["module.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-guard")
                .extensions(["guard.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-decorator")
                .extensions(["decorator.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-gateway")
                .extensions(["gateway.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-middleware")
                .extensions(["middleware.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("nest-pipe")
                .extensions(["pipe.ts"])
                .packs([IconPack::Nest]),
            FileIcon::new("redux-action")
                .extensions(["action.js", "action.ts"])
                .packs([IconPack::Redux]),
            FileIcon::new("redux-reducer")
                .extensions(["reducer.js", "reducer.ts"])
                .packs([IconPack::Redux]),
            FileIcon::new("redux-store")
                .extensions(["store.js", "store.ts"])
                .packs([IconPack::Redux]),
            FileIcon::new("redux-selector")
                .extensions(["selector.js", "selector.ts"])
                .packs([IconPack::Redux]),
            FileIcon::new("vue-config")
                .names(["vue.config.js", "vue.config.ts", "vetur.config.js"])
                .packs([IconPack::Vue, IconPack::Vuex]),
            FileIcon::new("vuex-store")
                .extensions(["store.js", "store.ts"])
                .packs([IconPack::Vuex]),
            FileIcon::new("qwik").names(["qwik.config.ts"]).packs([IconPack::Qwik]),
            FileIcon::new("roblox")
                .extensions(["rbxl", "rbxlx", "rbxm", "rbxmx"])
                .packs([IconPack::Roblox]),
            FileIcon::new("luau")
                .extensions(["luau"])
                .packs([IconPack::Roblox])
                .clone_of(CloneSource::new("lua", "blue-400")),
        ],
    }
}
