use super::Pointer;
use crate::PointerErrorKind;
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use quickcheck_macros::quickcheck;

#[test]
fn test_rfc_examples() {
    let cases: [(&str, &[&str]); 12] = [
        ("", &[]),
        ("/foo", &["foo"]),
        ("/foo/0", &["foo", "0"]),
        ("/", &[""]),
        ("/a~1b", &["a/b"]),
        ("/c%d", &["c%d"]),
        ("/e^f", &["e^f"]),
        ("/g|h", &["g|h"]),
        ("/i\\j", &["i\\j"]),
        ("/k\"l", &["k\"l"]),
        ("/ ", &[" "]),
        ("/m~0n", &["m~n"]),
    ];
    for (s, tokens) in cases {
        let ptr = Pointer::parse(s).unwrap();
        assert_eq!(ptr.as_slice(), tokens, "parsing {s:?}");
        assert_eq!(ptr.to_string(), s, "rendering {s:?}");
        assert_eq!(ptr, Pointer::from(tokens));
    }
}

#[test]
fn test_try_from_validation() {
    assert!(Pointer::try_from("").is_ok());
    assert!(Pointer::try_from("/").is_ok());
    assert!(Pointer::try_from("/foo").is_ok());
    assert!(Pointer::try_from(String::from("/foo/bar/baz/~1/~0")).is_ok());
    assert_eq!(
        "/foo/bar/baz/~1/~0".parse::<Pointer>().unwrap(),
        "/foo/bar/baz/~1/~0"
    );

    let err = Pointer::try_from("/foo~").unwrap_err();
    assert_eq!(err.kind(), PointerErrorKind::MalformedPointer);
    assert_eq!(err.to_string(), "Illegal token in JSON Pointer - \"/foo~\"");

    let err = Pointer::try_from("foo").unwrap_err();
    assert_eq!(err.kind(), PointerErrorKind::MalformedPointer);
    assert_eq!(err.to_string(), "Illegal JSON Pointer - \"foo\"");

    assert!(Pointer::parse("abc").is_err());
    assert!(Pointer::parse("/~").is_err());
}

#[test]
fn test_formatting() {
    assert_eq!(Pointer::from_tokens(["foo", "bar"]), "/foo/bar");
    assert_eq!(
        Pointer::from_tokens(["~/foo", "~bar", "/baz"]),
        "/~0~1foo/~0bar/~1baz"
    );
    assert_eq!(Pointer::from_tokens(["field", "", "baz"]), "/field//baz");
    assert_eq!(Pointer::default(), "");
    assert_eq!(alloc::format!("{:?}", Pointer::parse("/a~1b").unwrap()), "\"/a~1b\"");
}

#[test]
fn test_to_prefix_string() {
    let ptr = Pointer::from_tokens(["a/b", "c", "d"]);
    assert_eq!(ptr.to_prefix_string(0), "");
    assert_eq!(ptr.to_prefix_string(1), "/a~1b");
    assert_eq!(ptr.to_prefix_string(3), ptr.to_string());
}

#[test]
fn test_root() {
    assert!(Pointer::ROOT.is_root());
    assert_eq!(Pointer::ROOT.depth(), 0);
    assert_eq!(Pointer::ROOT.current(), None);
    assert_eq!(Pointer::root(), Pointer::default());
    assert!(Pointer::ptr_eq(&Pointer::parse("").unwrap(), &Pointer::ROOT));
    assert!(Pointer::ptr_eq(
        &Pointer::from_tokens(Vec::<String>::new()),
        &Pointer::ROOT
    ));
    assert!(Pointer::ptr_eq(&Pointer::from(Vec::<String>::new()), &Pointer::ROOT));
    assert!(Pointer::ROOT.to_vec().is_empty());
    assert!(Pointer::ROOT.to_boxed_slice().is_empty());
}

#[test]
fn test_observers() {
    let ptr = Pointer::parse("/foo/bar/-").unwrap();
    assert_eq!(ptr.depth(), 3);
    assert!(!ptr.is_root());
    assert_eq!(ptr.current(), Some("-"));
    assert_eq!(ptr.get(0), Some("foo"));
    assert_eq!(ptr.get(2), Some("-"));
    assert_eq!(ptr.get(3), None);
    assert_eq!(&ptr[1], "bar");
}

#[test]
#[should_panic]
fn test_index_out_of_bounds() {
    let ptr = Pointer::parse("/foo").unwrap();
    let _ = &ptr[1];
}

#[test]
fn test_copies_are_independent() {
    let ptr = Pointer::parse("/a/b").unwrap();
    let mut tokens = ptr.to_vec();
    tokens[0].push_str("changed");
    tokens.push("c".into());
    let mut boxed = ptr.to_boxed_slice();
    boxed[1] = "changed".into();
    assert_eq!(ptr, "/a/b");
    assert_eq!(ptr.depth(), 2);
}

#[test]
fn test_child() {
    let ptr = Pointer::ROOT.child("foo");
    assert_eq!(ptr, "/foo");
    let ptr = ptr.child("a/b").child("");
    assert_eq!(ptr, "/foo/a~1b/");
    assert_eq!(ptr.depth(), 3);
}

#[test]
fn test_child_index() {
    let ptr = Pointer::parse("/foo").unwrap();
    assert_eq!(ptr.child_index(0).unwrap(), "/foo/0");
    assert_eq!(ptr.child_index(12).unwrap(), ptr.child("12"));

    let err = ptr.child_index(-3).unwrap_err();
    assert_eq!(err.kind(), PointerErrorKind::NegativeIndex);
    assert_eq!(err.message(), "JSON Pointer index -3 must not be negative");
    assert_eq!(err.context(), Some(&ptr));
}

#[test]
fn test_join() {
    let a = Pointer::parse("/a/b").unwrap();
    let b = Pointer::parse("/c").unwrap();
    assert_eq!(a.join(&b), "/a/b/c");
    assert_eq!(b.join(&a), "/c/a/b");

    assert!(Pointer::ptr_eq(&Pointer::ROOT.join(&b), &b));
    assert!(Pointer::ptr_eq(&a.join(&Pointer::ROOT), &a));
    assert!(Pointer::ROOT.join(&Pointer::ROOT).is_root());
}

#[test]
fn test_parent() {
    let ptr = Pointer::parse("/foo/bar").unwrap();
    let parent = ptr.parent().unwrap();
    assert_eq!(parent, "/foo");
    let root = parent.parent().unwrap();
    assert!(Pointer::ptr_eq(&root, &Pointer::ROOT));

    let err = Pointer::ROOT.parent().unwrap_err();
    assert_eq!(err.kind(), PointerErrorKind::ParentOfRoot);
    assert_eq!(err.message(), "Can't get parent of root JSON Pointer");
    assert_eq!(err.context(), Some(&Pointer::ROOT));
}

#[test]
fn test_with_parent() {
    let ptr = Pointer::parse("/bar").unwrap();
    assert_eq!(ptr.with_parent("foo"), "/foo/bar");
    assert_eq!(ptr.with_parent("a/b"), "/a~1b/bar");
    assert_eq!(Pointer::ROOT.with_parent("foo"), "/foo");

    assert_eq!(ptr.with_parent_index(2).unwrap(), "/2/bar");
    let err = ptr.with_parent_index(-1).unwrap_err();
    assert_eq!(err.kind(), PointerErrorKind::NegativeIndex);
    assert_eq!(err.context(), Some(&ptr));

    let parent = Pointer::parse("/x/y").unwrap();
    assert_eq!(ptr.with_parent_pointer(&parent), "/x/y/bar");
    assert!(Pointer::ptr_eq(&ptr.with_parent_pointer(&Pointer::ROOT), &ptr));
    assert!(Pointer::ptr_eq(
        &Pointer::ROOT.with_parent_pointer(&parent),
        &parent
    ));
}

#[test]
fn test_truncate() {
    let ptr = Pointer::parse("/abc/def/ghi").unwrap();
    assert_eq!(ptr.truncate(2).unwrap(), Pointer::parse("/abc/def").unwrap());
    assert_eq!(ptr.truncate(1).unwrap(), "/abc");
    assert!(Pointer::ptr_eq(&ptr.truncate(3).unwrap(), &ptr));
    assert!(Pointer::ptr_eq(&ptr.truncate(0).unwrap(), &Pointer::ROOT));
    assert!(Pointer::ptr_eq(
        &Pointer::ROOT.truncate(0).unwrap(),
        &Pointer::ROOT
    ));

    for len in [4, -1, isize::MIN, isize::MAX] {
        let err = ptr.truncate(len).unwrap_err();
        assert_eq!(err.kind(), PointerErrorKind::IllegalTruncate);
        assert_eq!(err.message(), alloc::format!("Illegal truncate ({len})"));
        assert_eq!(err.context(), Some(&ptr));
    }
}

#[test]
fn test_add() {
    let ptr = Pointer::parse("/foo").unwrap();
    assert_eq!(&ptr + "bar", "/foo/bar");
    assert_eq!(&ptr + String::from("a/b"), "/foo/a~1b");
    assert_eq!(&ptr + 7usize, "/foo/7");
    assert_eq!(&ptr + &Pointer::parse("/x/y").unwrap(), "/foo/x/y");
    assert_eq!(ptr.clone() + "bar" + 0usize, "/foo/bar/0");
    assert_eq!(Pointer::ROOT + ptr.clone(), ptr);
    assert!(Pointer::ptr_eq(&(&ptr + &Pointer::ROOT), &ptr));
    assert!(Pointer::ptr_eq(&(Pointer::ROOT + &ptr), &ptr));
}

#[test]
fn test_ancestors() {
    let ptr = Pointer::parse("/a/b/c").unwrap();
    let ancestors: Vec<Pointer> = ptr.ancestors().collect();
    assert_eq!(ancestors, vec![
        Pointer::parse("/a/b/c").unwrap(),
        Pointer::parse("/a/b").unwrap(),
        Pointer::parse("/a").unwrap(),
        Pointer::ROOT,
    ]);
    assert!(Pointer::ptr_eq(&ancestors[0], &ptr));
    assert_eq!(ptr.ancestors().len(), 4);
    assert_eq!(Pointer::ROOT.ancestors().count(), 1);
}

#[test]
fn test_starts_with() {
    let ptr = Pointer::parse("/a/b").unwrap();
    assert!(ptr.starts_with(&Pointer::ROOT));
    assert!(ptr.starts_with(&ptr));
    assert!(ptr.starts_with(&Pointer::parse("/a").unwrap()));
    assert!(!ptr.starts_with(&Pointer::parse("/b").unwrap()));
    assert!(!ptr.starts_with(&Pointer::parse("/a/b/c").unwrap()));
    // token-wise, not string-wise
    assert!(!Pointer::parse("/ab").unwrap().starts_with(&Pointer::parse("/a").unwrap()));
}

#[test]
#[cfg(feature = "std")]
fn test_equality_and_hash() {
    use std::collections::HashSet;
    let a = Pointer::parse("/a/b").unwrap();
    let b = Pointer::from_tokens(["a", "b"]);
    let c = Pointer::from_tokens(["b", "a"]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Pointer::parse("/a").unwrap());
    let set: HashSet<Pointer> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_error_at() {
    let ptr = Pointer::parse("/foo/0").unwrap();
    let err = ptr.error("index out of range");
    assert_eq!(err.kind(), PointerErrorKind::Custom);
    assert_eq!(err.to_string(), "index out of range, at /foo/0");
}

#[test]
fn test_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pointer>();
}

#[test]
#[cfg(feature = "std")]
fn test_uri_fragment() {
    let ptr = Pointer::parse("/a~1b").unwrap();
    assert_eq!(ptr.to_uri_fragment(), "/a~1b");
    let ptr = Pointer::parse("/e^f").unwrap();
    assert_eq!(ptr.to_uri_fragment(), "/e%5Ef");
    assert_eq!(Pointer::from_uri_fragment("/e%5Ef").unwrap(), ptr);
}

#[test]
#[cfg(feature = "serde")]
fn test_serde() {
    let ptr = Pointer::parse("/foo/a~1b").unwrap();
    let json = serde_json::to_string(&ptr).unwrap();
    assert_eq!(json, "\"/foo/a~1b\"");
    let back: Pointer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ptr);

    let err = serde_json::from_str::<Pointer>("\"foo\"").unwrap_err();
    assert!(err.to_string().contains("Illegal JSON Pointer"));
}

#[quickcheck]
fn qc_string_round_trip(ptr: Pointer) -> bool {
    Pointer::parse(&ptr.to_string()).unwrap() == ptr
}

#[quickcheck]
fn qc_parent_inverts_child(ptr: Pointer, name: String) -> bool {
    let child = ptr.child(name);
    child.depth() == ptr.depth() + 1 && child.parent().unwrap() == ptr
}

#[quickcheck]
fn qc_parent_depth(ptr: Pointer) -> bool {
    match ptr.parent() {
        Ok(parent) => parent.depth() + 1 == ptr.depth(),
        Err(_) => ptr.is_root(),
    }
}

#[quickcheck]
fn qc_join_depth(a: Pointer, b: Pointer) -> bool {
    let joined = a.join(&b);
    joined.depth() == a.depth() + b.depth()
        && joined.starts_with(&a)
        && joined.truncate(a.depth() as isize).unwrap() == a
}

#[quickcheck]
fn qc_with_parent_mirrors_child(ptr: Pointer, name: String) -> bool {
    let prefixed = ptr.with_parent(name.clone());
    prefixed.get(0) == Some(name.as_str())
        && Pointer::ROOT.child(name).join(&ptr) == prefixed
}
