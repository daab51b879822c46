pub(super) const STUB: &str = r#"#include <stdio.h>

int main(void) {
    // Your solution here
    return 0;
}
"#;
