//! Base rules: structural correctness, variable hygiene, and stylistic
//! formatting defaults, plus the typed-source overlay
//!
//! This is the only mandatory rule builder. It always emits one fragment
//! covering plain and typed sources; when typed-source support is enabled
//! it emits a second fragment scoped to the typed-source globs, carrying
//! the type-aware parser configuration and the paired base-rule
//! replacements that keep equivalent rules from double-reporting.

use crate::options::ComposeOptions;
use nori_core::fragment::{ConfigFragment, LanguageOptions, ParserKind, glob_list};
use nori_core::rules::{RuleEntry, RuleMap, apply_overrides, replace_base_rule, rule_map};
use serde_json::json;

pub const JS_FILES: &[&str] = &["**/*.js", "**/*.cjs", "**/*.mjs", "**/*.jsx"];
pub const TS_FILES: &[&str] = &["**/*.ts", "**/*.cts", "**/*.mts", "**/*.tsx"];

pub fn fragments(options: &ComposeOptions) -> Vec<ConfigFragment> {
    let mut fragments = vec![js_fragment(options)];
    if options.typescript.is_enabled() {
        fragments.push(ts_fragment(options));
    }
    fragments
}

fn js_fragment(options: &ComposeOptions) -> ConfigFragment {
    let mut rules = best_practice_rules();
    rules.extend(error_checking_rules(options));
    rules.extend(variable_rules());
    rules.extend(stylistic_rules());
    if let Some(overrides) = &options.base {
        apply_overrides(&mut rules, overrides);
    }

    let mut files = glob_list(JS_FILES);
    files.extend(glob_list(TS_FILES));
    ConfigFragment::scoped(files, rules)
}

fn ts_fragment(options: &ComposeOptions) -> ConfigFragment {
    let mut rules = ts_recommended_rules();
    rules.extend(disabled_base_rules());
    rules.extend(conflicting_base_rules());
    rules.extend(ts_best_practice_rules());
    rules.extend(ts_stylistic_rules());
    if options.stylistic.is_enabled() {
        // The stylistic preset owns these concerns for typed sources too.
        rules.extend(rule_map([
            ("stylistic/semi", RuleEntry::off()),
            ("stylistic/quotes", RuleEntry::off()),
            ("stylistic/indent", RuleEntry::off()),
            ("stylistic/brace-style", RuleEntry::off()),
            ("stylistic/no-extra-parens", RuleEntry::off()),
            ("stylistic/func-call-spacing", RuleEntry::off()),
        ]));
    }
    apply_overrides(&mut rules, &options.typescript.overrides());

    ConfigFragment {
        files: glob_list(TS_FILES),
        language_options: Some(LanguageOptions {
            parser: Some(ParserKind::Typescript),
            parser_options: Some(json!({ "project": true })),
            ..LanguageOptions::default()
        }),
        rules,
        ..ConfigFragment::default()
    }
}

fn best_practice_rules() -> RuleMap {
    rule_map([
        ("accessor-pairs", RuleEntry::off()),
        ("array-callback-return", RuleEntry::error()),
        ("block-scoped-var", RuleEntry::error()),
        ("class-methods-use-this", RuleEntry::off()),
        ("complexity", RuleEntry::off()),
        ("consistent-return", RuleEntry::error()),
        ("curly", RuleEntry::error_with([json!("all")])),
        ("default-case", RuleEntry::off()),
        (
            "dot-notation",
            RuleEntry::error_with([json!({ "allowKeywords": true })]),
        ),
        ("dot-location", RuleEntry::error_with([json!("property")])),
        ("eqeqeq", RuleEntry::error_with([json!("smart")])),
        ("guard-for-in", RuleEntry::error()),
        ("max-classes-per-file", RuleEntry::off()),
        ("no-alert", RuleEntry::error()),
        ("no-case-declarations", RuleEntry::error()),
        ("no-caller", RuleEntry::error()),
        ("no-div-regex", RuleEntry::error()),
        ("no-else-return", RuleEntry::off()),
        ("no-empty-function", RuleEntry::error()),
        ("no-empty-pattern", RuleEntry::error()),
        ("no-eq-null", RuleEntry::off()),
        ("no-eval", RuleEntry::error()),
        ("no-extend-native", RuleEntry::error()),
        ("no-extra-bind", RuleEntry::error()),
        ("no-extra-label", RuleEntry::error()),
        ("no-fallthrough", RuleEntry::error()),
        ("no-floating-decimal", RuleEntry::error()),
        ("no-global-assign", RuleEntry::error()),
        ("no-implicit-coercion", RuleEntry::error()),
        ("no-implicit-globals", RuleEntry::error()),
        ("no-implied-eval", RuleEntry::error()),
        ("no-invalid-this", RuleEntry::off()),
        ("no-iterator", RuleEntry::error()),
        ("no-labels", RuleEntry::error_with([json!({ "allowLoop": true })])),
        ("no-lone-blocks", RuleEntry::error()),
        ("no-loop-func", RuleEntry::error()),
        ("no-magic-numbers", RuleEntry::off()),
        ("no-multi-spaces", RuleEntry::error()),
        ("no-multi-str", RuleEntry::off()),
        ("no-new-func", RuleEntry::error()),
        ("no-new-wrappers", RuleEntry::error()),
        ("no-new", RuleEntry::error()),
        ("no-octal-escape", RuleEntry::error()),
        ("no-octal", RuleEntry::error()),
        ("no-param-reassign", RuleEntry::off()),
        ("no-process-env", RuleEntry::error()),
        ("no-proto", RuleEntry::error()),
        ("no-redeclare", RuleEntry::error()),
        ("no-restricted-properties", RuleEntry::off()),
        ("no-return-assign", RuleEntry::error()),
        ("no-return-await", RuleEntry::error()),
        ("no-script-url", RuleEntry::off()),
        (
            "no-self-assign",
            RuleEntry::error_with([json!({ "props": true })]),
        ),
        ("no-self-compare", RuleEntry::error()),
        ("no-sequences", RuleEntry::error()),
        ("no-throw-literal", RuleEntry::error()),
        ("no-unmodified-loop-condition", RuleEntry::error()),
        ("no-unused-expressions", RuleEntry::error()),
        ("no-unused-labels", RuleEntry::error()),
        ("no-useless-call", RuleEntry::error()),
        ("no-useless-catch", RuleEntry::error()),
        ("no-useless-concat", RuleEntry::error()),
        ("no-useless-escape", RuleEntry::error()),
        ("no-useless-return", RuleEntry::error()),
        ("no-void", RuleEntry::error()),
        ("no-warning-comments", RuleEntry::error()),
        ("no-with", RuleEntry::error()),
        ("prefer-named-capture-group", RuleEntry::off()),
        (
            "prefer-promise-reject-errors",
            RuleEntry::error_with([json!({ "allowEmptyReject": true })]),
        ),
        ("radix", RuleEntry::error()),
        ("require-await", RuleEntry::error()),
        ("require-unicode-regexp", RuleEntry::off()),
        ("vars-on-top", RuleEntry::off()),
        ("wrap-iife", RuleEntry::error_with([json!("inside")])),
        ("yoda", RuleEntry::error_with([json!("never")])),
        ("no-constructor-return", RuleEntry::error()),
        ("grouped-accessor-pairs", RuleEntry::error()),
    ])
}

fn error_checking_rules(options: &ComposeOptions) -> RuleMap {
    rule_map([
        ("for-direction", RuleEntry::error()),
        (
            "getter-return",
            RuleEntry::error_with([json!({ "allowImplicit": true })]),
        ),
        ("no-async-promise-executor", RuleEntry::error()),
        ("no-await-in-loop", RuleEntry::off()),
        ("no-compare-neg-zero", RuleEntry::error()),
        ("no-cond-assign", RuleEntry::error()),
        // Libraries may not claim the console; applications must not.
        (
            "no-console",
            if options.library {
                RuleEntry::off()
            } else {
                RuleEntry::error()
            },
        ),
        (
            "no-constant-condition",
            RuleEntry::error_with([json!({ "checkLoops": false })]),
        ),
        ("no-control-regex", RuleEntry::error()),
        ("no-debugger", RuleEntry::off()),
        ("no-dupe-args", RuleEntry::error()),
        ("no-dupe-keys", RuleEntry::error()),
        ("no-duplicate-case", RuleEntry::error()),
        ("no-empty-character-class", RuleEntry::error()),
        ("no-empty", RuleEntry::error()),
        ("no-ex-assign", RuleEntry::error()),
        ("no-extra-boolean-cast", RuleEntry::error()),
        ("no-extra-parens", RuleEntry::off()),
        ("no-extra-semi", RuleEntry::error()),
        ("no-func-assign", RuleEntry::error()),
        ("no-inner-declarations", RuleEntry::error()),
        ("no-invalid-regexp", RuleEntry::error()),
        ("no-irregular-whitespace", RuleEntry::error()),
        ("no-misleading-character-class", RuleEntry::error()),
        ("no-obj-calls", RuleEntry::error()),
        ("no-prototype-builtins", RuleEntry::error()),
        ("no-regex-spaces", RuleEntry::error()),
        ("no-sparse-arrays", RuleEntry::error()),
        ("no-template-curly-in-string", RuleEntry::error()),
        ("no-unreachable", RuleEntry::error()),
        ("no-unsafe-finally", RuleEntry::error()),
        ("no-unsafe-negation", RuleEntry::error()),
        ("require-atomic-updates", RuleEntry::error()),
        ("use-isnan", RuleEntry::error()),
        ("valid-jsdoc", RuleEntry::off()),
        ("valid-typeof", RuleEntry::error()),
        ("no-unexpected-multiline", RuleEntry::error()),
        ("no-setter-return", RuleEntry::error()),
        ("no-dupe-else-if", RuleEntry::error()),
    ])
}

fn variable_rules() -> RuleMap {
    rule_map([
        ("init-declarations", RuleEntry::off()),
        ("no-catch-shadow", RuleEntry::error()),
        ("no-delete-var", RuleEntry::error()),
        ("no-label-var", RuleEntry::error()),
        ("no-restricted-globals", RuleEntry::error()),
        ("no-shadow-restricted-names", RuleEntry::error()),
        ("no-shadow", RuleEntry::error()),
        ("no-undef-init", RuleEntry::error()),
        ("no-undef", RuleEntry::error()),
        ("no-undefined", RuleEntry::off()),
        ("no-use-before-define", RuleEntry::error_with([json!("nofunc")])),
        (
            "no-unused-vars",
            RuleEntry::error_with([json!({
                "ignoreRestSiblings": true,
                "args": "none",
                "caughtErrors": "none"
            })]),
        ),
    ])
}

fn stylistic_rules() -> RuleMap {
    rule_map([
        ("array-bracket-newline", RuleEntry::off()),
        ("array-bracket-spacing", RuleEntry::error_with([json!("never")])),
        ("array-element-newline", RuleEntry::off()),
        ("block-spacing", RuleEntry::error_with([json!("always")])),
        (
            "brace-style",
            RuleEntry::error_with([json!("1tbs"), json!({ "allowSingleLine": true })]),
        ),
        (
            "camelcase",
            RuleEntry::error_with([json!({ "properties": "always" })]),
        ),
        ("capitalized-comments", RuleEntry::off()),
        (
            "comma-dangle",
            RuleEntry::error_with([json!({
                "arrays": "always-multiline",
                "objects": "always-multiline",
                "imports": "always-multiline",
                "exports": "always-multiline",
                "functions": "always-multiline"
            })]),
        ),
        (
            "comma-spacing",
            RuleEntry::error_with([json!({ "before": false, "after": true })]),
        ),
        ("comma-style", RuleEntry::error_with([json!("last")])),
        (
            "computed-property-spacing",
            RuleEntry::error_with([json!("never")]),
        ),
        ("consistent-this", RuleEntry::error_with([json!("self")])),
        ("eol-last", RuleEntry::error()),
        ("func-call-spacing", RuleEntry::error()),
        ("func-name-matching", RuleEntry::error()),
        ("func-names", RuleEntry::off()),
        (
            "func-style",
            RuleEntry::error_with([json!("declaration"), json!({ "allowArrowFunctions": true })]),
        ),
        (
            "function-paren-newline",
            RuleEntry::error_with([json!("consistent")]),
        ),
        ("id-blacklist", RuleEntry::off()),
        ("id-length", RuleEntry::off()),
        ("id-match", RuleEntry::off()),
        ("implicit-arrow-linebreak", RuleEntry::off()),
        ("indent", RuleEntry::off()),
        (
            "indent-legacy",
            RuleEntry::error_with([json!(2), json!({ "SwitchCase": 1, "MemberExpression": 1 })]),
        ),
        ("jsx-quotes", RuleEntry::error_with([json!("prefer-double")])),
        (
            "key-spacing",
            RuleEntry::error_with([json!({ "beforeColon": false, "afterColon": true })]),
        ),
        (
            "keyword-spacing",
            RuleEntry::error_with([json!({ "before": true, "after": true, "overrides": {} })]),
        ),
        ("linebreak-style", RuleEntry::off()),
        (
            "lines-around-comment",
            RuleEntry::error_with([json!({ "beforeBlockComment": true })]),
        ),
        (
            "lines-between-class-members",
            RuleEntry::error_with([json!("always"), json!({ "exceptAfterSingleLine": true })]),
        ),
        ("line-comment-position", RuleEntry::off()),
        ("max-lines", RuleEntry::off()),
        ("max-lines-per-function", RuleEntry::off()),
        ("max-nested-callbacks", RuleEntry::off()),
        (
            "max-statements-per-line",
            RuleEntry::error_with([json!({ "max": 2 })]),
        ),
        ("multiline-comment-style", RuleEntry::off()),
        ("multiline-ternary", RuleEntry::off()),
        (
            "new-cap",
            RuleEntry::error_with([json!({ "newIsCap": true, "capIsNew": false })]),
        ),
        ("new-parens", RuleEntry::error()),
        ("newline-after-var", RuleEntry::off()),
        ("newline-before-return", RuleEntry::off()),
        (
            "newline-per-chained-call",
            RuleEntry::error_with([json!({ "ignoreChainWithDepth": 3 })]),
        ),
        ("no-array-constructor", RuleEntry::error()),
        ("no-continue", RuleEntry::off()),
        ("no-inline-comments", RuleEntry::off()),
        ("no-lonely-if", RuleEntry::error()),
        ("no-mixed-operators", RuleEntry::error()),
        ("no-mixed-spaces-and-tabs", RuleEntry::error()),
        ("no-multi-assign", RuleEntry::error()),
        ("no-multiple-empty-lines", RuleEntry::error()),
        ("no-negated-condition", RuleEntry::error()),
        ("no-nested-ternary", RuleEntry::error()),
        ("no-new-object", RuleEntry::error()),
        ("no-restricted-syntax", RuleEntry::off()),
        ("no-tabs", RuleEntry::error()),
        ("no-ternary", RuleEntry::off()),
        ("no-trailing-spaces", RuleEntry::error()),
        ("no-underscore-dangle", RuleEntry::off()),
        ("no-unneeded-ternary", RuleEntry::error()),
        ("no-whitespace-before-property", RuleEntry::error()),
        ("nonblock-statement-body-position", RuleEntry::off()),
        ("object-curly-newline", RuleEntry::off()),
        ("object-curly-spacing", RuleEntry::error_with([json!("never")])),
        ("object-property-newline", RuleEntry::off()),
        ("one-var", RuleEntry::error_with([json!("never")])),
        (
            "one-var-declaration-per-line",
            RuleEntry::error_with([json!("initializations")]),
        ),
        ("operator-assignment", RuleEntry::error_with([json!("always")])),
        (
            "operator-linebreak",
            RuleEntry::error_with([
                json!("after"),
                json!({ "overrides": { "?": "before", ":": "before" } }),
            ]),
        ),
        ("padded-blocks", RuleEntry::off()),
        (
            "padding-line-between-statements",
            RuleEntry::error_with([
                json!({ "blankLine": "always", "prev": "directive", "next": "*" }),
                json!({ "blankLine": "any", "prev": "directive", "next": "directive" }),
            ]),
        ),
        ("prefer-object-spread", RuleEntry::error()),
        ("quote-props", RuleEntry::error_with([json!("as-needed")])),
        (
            "quotes",
            RuleEntry::error_with([
                json!("single"),
                json!({ "avoidEscape": true, "allowTemplateLiterals": true }),
            ]),
        ),
        ("require-jsdoc", RuleEntry::off()),
        (
            "semi-spacing",
            RuleEntry::error_with([json!({ "before": false, "after": true })]),
        ),
        ("semi-style", RuleEntry::error_with([json!("last")])),
        ("semi", RuleEntry::error_with([json!("always")])),
        ("sort-keys", RuleEntry::off()),
        ("sort-vars", RuleEntry::off()),
        ("space-before-blocks", RuleEntry::error_with([json!("always")])),
        (
            "space-before-function-paren",
            RuleEntry::error_with([json!({
                "anonymous": "never",
                "named": "never",
                "asyncArrow": "always"
            })]),
        ),
        ("space-in-parens", RuleEntry::error_with([json!("never")])),
        ("space-infix-ops", RuleEntry::error()),
        (
            "space-unary-ops",
            RuleEntry::error_with([json!({ "words": true, "nonwords": false })]),
        ),
        (
            "spaced-comment",
            RuleEntry::error_with([json!("always"), json!({ "markers": ["=", "/"] })]),
        ),
        (
            "switch-colon-spacing",
            RuleEntry::error_with([json!({ "after": true, "before": false })]),
        ),
        ("template-tag-spacing", RuleEntry::error_with([json!("never")])),
        ("unicode-bom", RuleEntry::error_with([json!("never")])),
        ("wrap-regex", RuleEntry::off()),
        ("prefer-exponentiation-operator", RuleEntry::error()),
        (
            "sort-imports",
            RuleEntry::error_with([json!({
                "ignoreDeclarationSort": true,
                "allowSeparatedGroups": true
            })]),
        ),
    ])
}

/// Base rules the typed-source toolchain checks itself, or that have a
/// type-aware equivalent enabled below.
fn disabled_base_rules() -> RuleMap {
    let mut rules = rule_map([
        ("camelcase", RuleEntry::off()),
        ("no-dupe-args", RuleEntry::off()),
        ("no-dupe-keys", RuleEntry::off()),
        ("no-unreachable", RuleEntry::off()),
        ("valid-typeof", RuleEntry::off()),
        ("no-const-assign", RuleEntry::off()),
        ("no-this-before-super", RuleEntry::off()),
        ("func-style", RuleEntry::off()),
    ]);
    replace_base_rule(
        &mut rules,
        "no-unused-vars",
        "@typescript-eslint/no-unused-vars",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-unused-expressions",
        "@typescript-eslint/no-unused-expressions",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-useless-constructor",
        "@typescript-eslint/no-useless-constructor",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-shadow",
        "@typescript-eslint/no-shadow",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-use-before-define",
        "@typescript-eslint/no-use-before-define",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "require-await",
        "@typescript-eslint/require-await",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-magic-numbers",
        "@typescript-eslint/no-magic-numbers",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-empty-function",
        "@typescript-eslint/no-empty-function",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-array-constructor",
        "@typescript-eslint/no-array-constructor",
        RuleEntry::off(),
    );
    replace_base_rule(
        &mut rules,
        "no-redeclare",
        "@typescript-eslint/no-redeclare",
        RuleEntry::off(),
    );
    rules
}

/// Base rules that misbehave under the typed-source parser.
fn conflicting_base_rules() -> RuleMap {
    rule_map([
        ("strict", RuleEntry::off()),
        ("array-callback-return", RuleEntry::off()),
        ("getter-return", RuleEntry::off()),
        // Overloaded methods look like duplicate members to the base rule.
        ("no-dupe-class-members", RuleEntry::off()),
    ])
}

/// The type-checked recommended baseline for typed sources.
fn ts_recommended_rules() -> RuleMap {
    rule_map([
        ("@typescript-eslint/await-thenable", RuleEntry::error()),
        ("@typescript-eslint/ban-ts-comment", RuleEntry::error()),
        ("@typescript-eslint/no-array-delete", RuleEntry::error()),
        ("@typescript-eslint/no-base-to-string", RuleEntry::error()),
        ("@typescript-eslint/no-duplicate-enum-values", RuleEntry::error()),
        (
            "@typescript-eslint/no-duplicate-type-constituents",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-explicit-any", RuleEntry::error()),
        (
            "@typescript-eslint/no-extra-non-null-assertion",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-floating-promises", RuleEntry::error()),
        ("@typescript-eslint/no-for-in-array", RuleEntry::error()),
        ("@typescript-eslint/no-implied-eval", RuleEntry::error()),
        ("@typescript-eslint/no-misused-promises", RuleEntry::error()),
        ("@typescript-eslint/no-namespace", RuleEntry::error()),
        (
            "@typescript-eslint/no-non-null-asserted-optional-chain",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-redundant-type-constituents",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-require-imports", RuleEntry::error()),
        ("@typescript-eslint/no-this-alias", RuleEntry::error()),
        (
            "@typescript-eslint/no-unnecessary-type-assertion",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-unsafe-argument", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-assignment", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-call", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-member-access", RuleEntry::error()),
        ("@typescript-eslint/no-unsafe-return", RuleEntry::error()),
        ("@typescript-eslint/no-wrapper-object-types", RuleEntry::error()),
        ("@typescript-eslint/only-throw-error", RuleEntry::error()),
        ("@typescript-eslint/prefer-as-const", RuleEntry::error()),
        ("@typescript-eslint/prefer-namespace-keyword", RuleEntry::error()),
        ("@typescript-eslint/restrict-plus-operands", RuleEntry::error()),
        (
            "@typescript-eslint/restrict-template-expressions",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/unbound-method", RuleEntry::error()),
        (
            "@typescript-eslint/adjacent-overload-signatures",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/array-type", RuleEntry::error()),
        ("@typescript-eslint/ban-tslint-comment", RuleEntry::error()),
        ("@typescript-eslint/consistent-type-assertions", RuleEntry::error()),
        (
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error(),
        ),
        (
            "@typescript-eslint/no-confusing-non-null-assertion",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/no-inferrable-types", RuleEntry::error()),
        (
            "@typescript-eslint/non-nullable-type-assertion-style",
            RuleEntry::error(),
        ),
        ("@typescript-eslint/prefer-find", RuleEntry::error()),
        ("@typescript-eslint/prefer-for-of", RuleEntry::error()),
        ("@typescript-eslint/prefer-function-type", RuleEntry::error()),
        ("@typescript-eslint/prefer-includes", RuleEntry::error()),
        ("@typescript-eslint/prefer-optional-chain", RuleEntry::error()),
        ("@typescript-eslint/prefer-regexp-exec", RuleEntry::error()),
        (
            "@typescript-eslint/prefer-string-starts-ends-with",
            RuleEntry::error(),
        ),
    ])
}

fn ts_best_practice_rules() -> RuleMap {
    let mut rules = rule_map([
        ("@typescript-eslint/no-explicit-any", RuleEntry::off()),
        (
            "@typescript-eslint/consistent-generic-constructors",
            RuleEntry::error_with([json!("type-annotation")]),
        ),
        // Can flag chains whose short-circuiting the code relies on.
        ("@typescript-eslint/prefer-nullish-coalescing", RuleEntry::off()),
        (
            "@typescript-eslint/no-empty-object-type",
            RuleEntry::error_with([json!({ "allowInterfaces": "with-single-extends" })]),
        ),
    ]);
    replace_base_rule(
        &mut rules,
        "no-unused-vars",
        "@typescript-eslint/no-unused-vars",
        RuleEntry::error_with([json!({
            "ignoreRestSiblings": true,
            "args": "none",
            "caughtErrors": "none"
        })]),
    );
    rules
}

fn ts_stylistic_rules() -> RuleMap {
    let mut rules = RuleMap::new();
    replace_base_rule(
        &mut rules,
        "dot-notation",
        "@typescript-eslint/dot-notation",
        RuleEntry::error_with([json!({
            "allowPrivateClassPropertyAccess": true,
            "allowProtectedClassPropertyAccess": true,
            "allowIndexSignaturePropertyAccess": true
        })]),
    );
    rules.extend(rule_map([
        ("@typescript-eslint/no-inferrable-types", RuleEntry::off()),
        (
            "@typescript-eslint/member-ordering",
            RuleEntry::error_with([json!({
                "default": [
                    "public-static-field",
                    "public-static-get",
                    "protected-static-field",
                    "protected-static-get",
                    "private-static-field",
                    "private-static-get",
                    "#private-static-field",
                    "#private-static-get",
                    "public-static-method",
                    "protected-static-method",
                    "private-static-method",
                    "#private-static-method",
                    "public-instance-field",
                    "public-instance-get",
                    "protected-instance-field",
                    "protected-instance-get",
                    "private-instance-field",
                    "private-instance-get",
                    "#private-instance-field",
                    "#private-instance-get",
                    "get",
                    "constructor",
                    "public-instance-method",
                    "protected-instance-method",
                    "private-instance-method",
                    "#private-instance-method"
                ]
            })]),
        ),
        (
            "@typescript-eslint/consistent-type-imports",
            RuleEntry::error_with([json!({
                "prefer": "type-imports",
                "fixStyle": "inline-type-imports"
            })]),
        ),
        (
            "@typescript-eslint/consistent-indexed-object-style",
            RuleEntry::off(),
        ),
        (
            "@typescript-eslint/class-literal-property-style",
            RuleEntry::off(),
        ),
    ]));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FeatureToggle;
    use nori_core::rules::RuleSeverity;

    #[test]
    fn test_single_fragment_without_typescript() {
        let fragments = fragments(&ComposeOptions::default());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].files.len(), JS_FILES.len() + TS_FILES.len());
    }

    #[test]
    fn test_library_mode_permits_console() {
        let app = fragments(&ComposeOptions::default());
        assert_eq!(app[0].rules["no-console"], RuleEntry::error());

        let lib = fragments(&ComposeOptions {
            library: true,
            ..ComposeOptions::default()
        });
        assert!(lib[0].rules["no-console"].is_off());
    }

    #[test]
    fn test_typed_fragment_scope_and_parser() {
        let options = ComposeOptions {
            typescript: FeatureToggle::On,
            ..ComposeOptions::default()
        };
        let fragments = fragments(&options);
        assert_eq!(fragments.len(), 2);

        let typed = &fragments[1];
        assert_eq!(typed.files, glob_list(TS_FILES));
        let language = typed.language_options.as_ref().unwrap();
        assert_eq!(language.parser, Some(ParserKind::Typescript));
    }

    #[test]
    fn test_typed_fragment_replacements_are_paired() {
        let options = ComposeOptions {
            typescript: FeatureToggle::On,
            ..ComposeOptions::default()
        };
        let typed = &fragments(&options)[1];

        for (base_rule, replacement) in [
            ("no-shadow", "@typescript-eslint/no-shadow"),
            ("no-unused-vars", "@typescript-eslint/no-unused-vars"),
            ("dot-notation", "@typescript-eslint/dot-notation"),
            ("require-await", "@typescript-eslint/require-await"),
        ] {
            assert!(typed.rules[base_rule].is_off(), "{base_rule} must be off");
            assert!(
                typed.rules.contains_key(replacement),
                "{replacement} must accompany the disable"
            );
        }
    }

    #[test]
    fn test_typescript_overrides_win() {
        let options = ComposeOptions {
            typescript: FeatureToggle::Custom(rule_map([(
                "@typescript-eslint/no-explicit-any",
                RuleEntry::error(),
            )])),
            ..ComposeOptions::default()
        };
        let typed = &fragments(&options)[1];
        assert_eq!(
            typed.rules["@typescript-eslint/no-explicit-any"].severity(),
            RuleSeverity::Error
        );
    }

    #[test]
    fn test_base_overrides_win() {
        let options = ComposeOptions {
            base: Some(rule_map([("no-alert", RuleEntry::off())])),
            ..ComposeOptions::default()
        };
        let base = &fragments(&options)[0];
        assert!(base.rules["no-alert"].is_off());
    }
}
