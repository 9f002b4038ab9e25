#[cfg(test)]
pub const SOURCE_A: &str = "---
title: 'Hello'
author: Ken Kellner
date: 2020-01-02
output:
  html_document:
    theme: cosmo
---

Contents of post A.
";

#[cfg(test)]
pub const SOURCE_B: &str = "---
title: World
author: Ken Kellner
date: 2020-01-01
---

Contents of post B.
";

#[cfg(test)]
pub const SOURCE_NO_DATE: &str = "---
title: 'No date here'
author: Ken Kellner
---

Contents.
";

#[cfg(test)]
pub const SOURCE_NO_TITLE: &str = "---
author: Ken Kellner
date: 2020-03-04
---

Contents.
";
