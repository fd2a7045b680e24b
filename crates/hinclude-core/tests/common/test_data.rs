// crates/hinclude-core/tests/common/test_data.rs

pub const A_CPP: &str = "// this comment before include
#include \"dir1/b.h\"
// text between b.h and c.h
#include \"dir1/d.h\"

int SayHello() {
    cout << \"hello, world!\" << endl;
#   include<dummy.txt>
}
";

// no trailing newline on purpose
pub const B_H: &str = "// text from b.h before include
#include \"subdir/c.h\"
// text from b.h after include";

pub const C_H: &str = "// text from c.h before include
#include <std1.h>
// text from c.h after include
";

pub const D_H: &str = "// text from d.h before include
#include \"lib/std2.h\"
// text from d.h after include
";

pub const STD1_H: &str = "// std1\n";

pub const STD2_H: &str = "// std2\n";

/// Everything finalised before `<dummy.txt>` on line 8 of a.cpp.
pub const A_CPP_SPLICED: &str = "// this comment before include
// text from b.h before include
// text from c.h before include
// std1
// text from c.h after include
// text from b.h after include
// text between b.h and c.h
// text from d.h before include
// std2
// text from d.h after include

int SayHello() {
    cout << \"hello, world!\" << endl;
";

pub const SEARCH_DIRS: &[&str] = &["sources/include1", "sources/include2"];
