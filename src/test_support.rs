pub const TRICKY_PATHS: &[&str] = &[
    "",
    ".",
    "..",
    "/",
    "//",
    "///",
    "a",
    "abc",
    "abc/",
    "a//b",
    "/a//b/",
    "//a//b",
    "./",
    "./a",
    "a/.",
    "a/./b",
    "a/..",
    "a/../..",
    "a/../../b",
    "/a/../../b",
    "/..",
    "/../",
    "/../a",
    "../a/..",
    "../../x/./y/../z",
    ".../....",
    ".hidden/.x",
    "a/b.c/d.e",
    "/x/y/z/../../../..",
    "x/y/z/../../../../w",
    "données/./été/../x",
];
