//! JavaScript code generator.
//!
//! The page behavior does not depend on the portfolio: smooth scrolling for
//! in-page navigation and a scroll spy that marks the nav link of the
//! section currently in view.

use crate::GenerationError;

const SCRIPT: &str = r##"(function () {
  'use strict';

  const links = Array.from(document.querySelectorAll('.nav-links a[href^="#"]'));
  const sections = Array.from(document.querySelectorAll('section[id]'));
  const nav = document.querySelector('.site-nav');

  function navOffset() {
    return nav ? nav.offsetHeight : 0;
  }

  links.forEach(function (link) {
    link.addEventListener('click', function (event) {
      const target = document.querySelector(link.getAttribute('href'));
      if (!target) return;
      event.preventDefault();
      const top = target.getBoundingClientRect().top + window.pageYOffset - navOffset();
      window.scrollTo({ top: top, behavior: 'smooth' });
      history.replaceState(null, '', link.getAttribute('href'));
    });
  });

  function highlightCurrent() {
    const position = window.pageYOffset + navOffset() + 1;
    let current = null;
    sections.forEach(function (section) {
      if (section.offsetTop <= position) current = section.id;
    });
    links.forEach(function (link) {
      link.classList.toggle('active', link.getAttribute('href') === '#' + current);
    });
  }

  let ticking = false;
  window.addEventListener('scroll', function () {
    if (ticking) return;
    ticking = true;
    window.requestAnimationFrame(function () {
      highlightCurrent();
      ticking = false;
    });
  });

  document.addEventListener('DOMContentLoaded', highlightCurrent);
  highlightCurrent();
})();
"##;

/// Generate the behavior script. Always the same text.
pub fn generate() -> Result<String, GenerationError> {
    Ok(SCRIPT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_output() {
        assert_eq!(generate().unwrap(), generate().unwrap());
        assert_eq!(generate().unwrap(), SCRIPT);
    }

    #[test]
    fn test_smooth_scroll_and_scroll_spy() {
        let js = generate().unwrap();
        assert!(js.contains("behavior: 'smooth'"));
        assert!(js.contains("classList.toggle('active'"));
        assert!(js.contains("addEventListener('scroll'"));
    }

    #[test]
    fn test_safe_to_inline() {
        let js = generate().unwrap();
        assert!(!js.contains("</script"));
        assert!(!js.contains("eval("));
        assert!(!js.contains("new Function("));
    }
}
