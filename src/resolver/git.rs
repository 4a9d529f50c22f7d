//! `git ls-remote` invocation and parsing

use crate::domain::GitRef;

/// Git binary name
pub const GIT_PROGRAM: &str = "git";

/// Environment variable holding a bearer token for private HTTPS remotes
pub const GIT_TOKEN_ENV: &str = "PODUP_GIT_TOKEN";

/// The fully qualified refspec for a branch or tag; `None` for pinned commits
pub fn refspec(reference: &GitRef) -> Option<String> {
    match reference {
        GitRef::Branch(name) => Some(format!("refs/heads/{}", name)),
        GitRef::Tag(name) => Some(format!("refs/tags/{}", name)),
        GitRef::Commit(_) => None,
    }
}

/// Arguments for a plain ls-remote query
pub fn ls_remote_args(url: &str, spec: &str) -> Vec<String> {
    vec!["ls-remote".to_string(), url.to_string(), spec.to_string()]
}

/// Arguments for an authenticated retry against an HTTPS remote
pub fn ls_remote_args_with_token(url: &str, spec: &str, token: &str) -> Vec<String> {
    vec![
        "-c".to_string(),
        format!("http.extraHeader=AUTHORIZATION: bearer {}", token),
        "ls-remote".to_string(),
        url.to_string(),
        spec.to_string(),
    ]
}

/// Extracts the hash field of the first record (tab-separated, hash first)
pub fn parse_ls_remote(stdout: &str) -> Option<String> {
    let first = stdout.lines().next()?;
    let hash = first.split('\t').next()?.trim();
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_string())
    }
}
