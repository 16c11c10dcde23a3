//! Call-site extraction from client sources
//!
//! Every call to the request constructor (`ApiRequest::new(method, url)` by
//! default) is located with a `syn` visitor. The method is read from a
//! `Method::X` path or a string literal. The URL goes through a small
//! constant-folding evaluator:
//!
//! - string literals, and identifiers bound to `const` items or to earlier
//!   `let` bindings in the same function
//! - `a + b`, `(e)`, `&e`
//! - `.to_string()`, `.as_str()`, `.into()`, `.to_owned()`, `String::from(e)`
//! - `format!` and `concat!`
//!
//! Unresolved identifiers render as `{name}`, field accesses as `{field}`.
//! A `format!` placeholder whose argument cannot be evaluated, or that carries
//! a format spec such as `{:?}`, renders as `*`. Calls whose arguments have
//! any other shape are skipped and show up as missing operations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::{BinOp, Expr, ImplItemFn, ItemConst, ItemFn, Lit, Local, Macro, Member, Pat, Token};
use walkdir::WalkDir;

use crate::error::AuditError;

/// Bound on const-to-const indirection.
const MAX_DEPTH: usize = 16;

const PASSTHROUGH_METHODS: &[&str] = &["to_string", "as_str", "into", "to_owned", "as_ref"];

/// One request construction found in the client source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCall {
    /// Uppercase HTTP method
    pub method: String,
    /// Best-effort URL template
    pub url: String,
    pub file: PathBuf,
}

/// Rust files under `root`, or `root` itself when it is a file.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>, AuditError> {
    let metadata = std::fs::metadata(root).map_err(|source| AuditError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| AuditError::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "rs") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read and parse each file.
pub fn parse_sources(files: &[PathBuf]) -> Result<Vec<(PathBuf, syn::File)>, AuditError> {
    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
                path: path.clone(),
                source,
            })?;
            let ast = syn::parse_file(&text).map_err(|e| AuditError::SourceParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            Ok((path.clone(), ast))
        })
        .collect()
}

/// Find every constructor call across `files`. `const` items are shared
/// across files.
pub fn extract_calls(files: &[(PathBuf, syn::File)], constructor: &str) -> Vec<ClientCall> {
    let mut consts = ConstCollector::default();
    for (_, ast) in files {
        consts.visit_file(ast);
    }

    let constructor: Vec<String> = constructor
        .split("::")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let mut calls = Vec::new();
    for (path, ast) in files {
        let mut collector = CallCollector {
            consts: &consts.items,
            constructor: &constructor,
            scopes: Vec::new(),
            file: path,
            calls: Vec::new(),
        };
        collector.visit_file(ast);
        tracing::debug!(file = %path.display(), calls = collector.calls.len(), "scanned client source");
        calls.append(&mut collector.calls);
    }
    calls
}

#[derive(Default)]
struct ConstCollector {
    items: HashMap<String, Expr>,
}

impl<'ast> Visit<'ast> for ConstCollector {
    fn visit_item_const(&mut self, item: &'ast ItemConst) {
        self.items.insert(item.ident.to_string(), (*item.expr).clone());
        visit::visit_item_const(self, item);
    }
}

/// Local bindings of one function; `None` marks a binding whose value could
/// not be folded.
type Scope = HashMap<String, Option<String>>;

struct CallCollector<'a> {
    consts: &'a HashMap<String, Expr>,
    constructor: &'a [String],
    scopes: Vec<Scope>,
    file: &'a Path,
    calls: Vec<ClientCall>,
}

impl CallCollector<'_> {
    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator {
            consts: self.consts,
            locals: self.scopes.last(),
        }
    }

    fn is_constructor(&self, func: &Expr) -> bool {
        let Expr::Path(path) = func else {
            return false;
        };
        if self.constructor.is_empty() {
            return false;
        }
        let segments: Vec<String> = path.path.segments.iter().map(|s| s.ident.to_string()).collect();
        segments.ends_with(self.constructor)
    }

    fn record(&mut self, call: &syn::ExprCall) {
        let mut args = call.args.iter();
        let (Some(method_expr), Some(url_expr)) = (args.next(), args.next()) else {
            return;
        };
        let eval = self.evaluator();
        match (http_method(method_expr), eval.eval(url_expr, 0)) {
            (Some(method), Some(url)) => {
                tracing::trace!(%method, %url, "client call");
                self.calls.push(ClientCall {
                    method,
                    url,
                    file: self.file.to_path_buf(),
                });
            }
            _ => tracing::debug!(file = %self.file.display(), "skipping call with unrecognized arguments"),
        }
    }
}

impl<'ast> Visit<'ast> for CallCollector<'_> {
    fn visit_item_fn(&mut self, item: &'ast ItemFn) {
        self.scopes.push(Scope::new());
        visit::visit_item_fn(self, item);
        self.scopes.pop();
    }

    fn visit_impl_item_fn(&mut self, item: &'ast ImplItemFn) {
        self.scopes.push(Scope::new());
        visit::visit_impl_item_fn(self, item);
        self.scopes.pop();
    }

    fn visit_local(&mut self, local: &'ast Local) {
        visit::visit_local(self, local);

        let ident = match &local.pat {
            Pat::Ident(p) => &p.ident,
            Pat::Type(t) => match &*t.pat {
                Pat::Ident(p) => &p.ident,
                _ => return,
            },
            _ => return,
        };
        let value = local
            .init
            .as_ref()
            .and_then(|init| self.evaluator().eval(&init.expr, 0));
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(ident.to_string(), value);
        }
    }

    fn visit_expr_call(&mut self, call: &'ast syn::ExprCall) {
        if self.is_constructor(&call.func) {
            self.record(call);
        }
        visit::visit_expr_call(self, call);
    }
}

/// `Method::GET`, `reqwest::Method::GET`, or `"get"`.
fn http_method(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Path(path) => {
            let segments: Vec<_> = path.path.segments.iter().collect();
            match segments.as_slice() {
                [.., ty, verb] if ty.ident == "Method" => Some(verb.ident.to_string().to_ascii_uppercase()),
                _ => None,
            }
        }
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => Some(s.value().to_ascii_uppercase()),
            _ => None,
        },
        Expr::Paren(p) => http_method(&p.expr),
        Expr::Group(g) => http_method(&g.expr),
        Expr::Reference(r) => http_method(&r.expr),
        _ => None,
    }
}

struct Evaluator<'a> {
    consts: &'a HashMap<String, Expr>,
    locals: Option<&'a Scope>,
}

impl Evaluator<'_> {
    fn eval(&self, expr: &Expr, depth: usize) -> Option<String> {
        if depth > MAX_DEPTH {
            return None;
        }
        match expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(s) => Some(s.value()),
                _ => None,
            },
            Expr::Path(path) if path.qself.is_none() => {
                let name = path.path.segments.last()?.ident.to_string();
                if path.path.segments.len() == 1 {
                    // A local that could not be folded renders like any other
                    // unresolved identifier.
                    if let Some(bound) = self.locals.and_then(|l| l.get(&name)) {
                        return Some(bound.clone().unwrap_or_else(|| format!("{{{name}}}")));
                    }
                }
                Some(
                    self.lookup_const(&name, depth)
                        .unwrap_or_else(|| format!("{{{name}}}")),
                )
            }
            Expr::Field(field) => match &field.member {
                Member::Named(ident) => Some(format!("{{{ident}}}")),
                Member::Unnamed(index) => Some(format!("{{{}}}", index.index)),
            },
            Expr::Binary(bin) if matches!(bin.op, BinOp::Add(_)) => {
                let mut left = self.eval(&bin.left, depth + 1)?;
                left.push_str(&self.eval(&bin.right, depth + 1)?);
                Some(left)
            }
            Expr::Paren(p) => self.eval(&p.expr, depth + 1),
            Expr::Group(g) => self.eval(&g.expr, depth + 1),
            Expr::Reference(r) => self.eval(&r.expr, depth + 1),
            Expr::MethodCall(call)
                if call.args.is_empty() && PASSTHROUGH_METHODS.iter().any(|m| call.method == m) =>
            {
                self.eval(&call.receiver, depth + 1)
            }
            Expr::Call(call) if call.args.len() == 1 && is_string_from(&call.func) => {
                self.eval(&call.args[0], depth + 1)
            }
            Expr::Macro(m) => self.eval_macro(&m.mac, depth),
            _ => None,
        }
    }

    fn lookup_const(&self, name: &str, depth: usize) -> Option<String> {
        self.consts.get(name).and_then(|expr| {
            // Consts never see function locals.
            Evaluator {
                consts: self.consts,
                locals: None,
            }
            .eval(expr, depth + 1)
        })
    }

    fn eval_macro(&self, mac: &Macro, depth: usize) -> Option<String> {
        let name = mac.path.segments.last()?.ident.to_string();
        if name != "format" && name != "concat" {
            return None;
        }
        let args = mac
            .parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated)
            .ok()?;

        if name == "concat" {
            return args
                .iter()
                .map(|arg| self.eval(arg, depth + 1))
                .collect::<Option<Vec<_>>>()
                .map(|parts| parts.concat());
        }

        let mut args = args.iter();
        let template = match args.next()? {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(s) => s.value(),
                _ => return None,
            },
            _ => return None,
        };
        let mut positional = Vec::new();
        let mut named = HashMap::new();
        for arg in args {
            match arg {
                Expr::Assign(assign) => {
                    if let Expr::Path(p) = &*assign.left {
                        if let Some(ident) = p.path.get_ident() {
                            named.insert(ident.to_string(), &*assign.right);
                        }
                    }
                }
                other => positional.push(other),
            }
        }
        Some(self.render_format(&template, &positional, &named, depth))
    }

    fn render_format(
        &self,
        template: &str,
        positional: &[&Expr],
        named: &HashMap<String, &Expr>,
        depth: usize,
    ) -> String {
        let mut out = String::with_capacity(template.len());
        let mut next_positional = 0;
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut spec = String::new();
                    for c in chars.by_ref() {
                        if c == '}' {
                            break;
                        }
                        spec.push(c);
                    }
                    let (arg, format_spec) = match spec.split_once(':') {
                        Some((arg, format_spec)) => (arg.trim(), format_spec.trim()),
                        None => (spec.trim(), ""),
                    };

                    let value = if arg.is_empty() {
                        let expr = positional.get(next_positional).copied();
                        next_positional += 1;
                        expr.and_then(|e| self.eval(e, depth + 1))
                    } else if let Ok(index) = arg.parse::<usize>() {
                        positional.get(index).and_then(|e| self.eval(e, depth + 1))
                    } else if let Some(expr) = named.get(arg) {
                        self.eval(expr, depth + 1)
                    } else {
                        self.captured(arg, depth)
                    };

                    match value {
                        Some(v) if format_spec.is_empty() => out.push_str(&v),
                        _ => out.push('*'),
                    }
                }
                other => out.push(other),
            }
        }
        out
    }

    /// Implicitly captured `{name}` argument.
    fn captured(&self, name: &str, depth: usize) -> Option<String> {
        if let Some(bound) = self.locals.and_then(|l| l.get(name)) {
            return bound.clone();
        }
        self.lookup_const(name, depth)
    }
}

fn is_string_from(func: &Expr) -> bool {
    let Expr::Path(path) = func else {
        return false;
    };
    let segments: Vec<_> = path.path.segments.iter().collect();
    matches!(segments.as_slice(), [.., ty, f] if ty.ident == "String" && f.ident == "from")
}
