pub(super) const STUB: &str = r#"#include <bits/stdc++.h>
using namespace std;

int main() {
    // Your solution here
    return 0;
}
"#;
