//! Global CSS styles for the portfolio.
//!
//! Light, neutral palette with a single blue accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Text, primary buttons) */
  --ink: #111827;
  --ink-soft: #374151;

  /* SLATE (Muted text, borders) */
  --slate: #64748b;
  --border: rgba(100, 116, 139, 0.25);

  /* SKY (Links, focus) */
  --sky: #3b82f6;
  --sky-soft: rgba(59, 130, 246, 0.12);

  /* PAPER (Backgrounds) */
  --paper: #ffffff;
  --paper-muted: #f8fafc;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --radius: 0.75rem;
}

*, *::before, *::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--paper);
  -webkit-font-smoothing: antialiased;
}

p {
  margin: 0;
}

.muted {
  color: var(--slate);
  font-size: 0.875rem;
}

.small {
  font-size: 0.75rem;
}

.eyebrow {
  margin-bottom: 0.75rem;
  color: var(--slate);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 0.5rem;
  border: 1px solid transparent;
  font: inherit;
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: background 0.15s ease, border-color 0.15s ease;
}

.btn-md {
  height: 2.5rem;
  padding: 0 1rem;
  font-size: 0.875rem;
}

.btn-sm {
  height: 2rem;
  padding: 0 0.75rem;
  font-size: 0.8125rem;
}

.btn-primary {
  background: var(--ink);
  color: var(--paper);
}

.btn-primary:hover {
  background: var(--ink-soft);
}

.btn-outline {
  background: var(--paper);
  border-color: var(--border);
  color: var(--ink);
}

.btn-outline:hover {
  background: var(--paper-muted);
}

.btn-ghost {
  background: transparent;
  color: var(--ink);
}

.btn-ghost:hover {
  background: var(--paper-muted);
}

.btn:focus-visible {
  outline: 2px solid var(--sky);
  outline-offset: 2px;
}

.btn.blurred {
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(6px);
}

.badge {
  display: inline-block;
  width: fit-content;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  background: var(--paper-muted);
  border: 1px solid var(--border);
  font-size: 0.75rem;
  font-weight: 500;
}

/* === Home === */
.home {
  min-height: 100vh;
  background:
    radial-gradient(circle at 20% 10%, rgba(147, 197, 253, 0.35), transparent 45%),
    radial-gradient(circle at 80% 90%, rgba(191, 219, 254, 0.5), transparent 35%);
}

.home-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
  max-width: 72rem;
  margin: 0 auto;
  padding: 2rem 1.5rem 0;
}

.home-brand {
  font-size: 1.125rem;
  letter-spacing: 0.18em;
  text-transform: uppercase;
}

.home-nav {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.home-hero {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2.5rem;
  max-width: 72rem;
  min-height: calc(100vh - 5rem);
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.home-intro {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.home-title {
  margin: 0;
  font-size: 2.5rem;
  font-weight: 600;
  line-height: 1.15;
  letter-spacing: -0.02em;
}

.home-lede {
  max-width: 28rem;
  color: var(--slate);
}

.home-actions {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.home-divider {
  height: 1px;
  background: var(--border);
}

.home-snapshot {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1.75rem;
}

.metric-grid {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
}

.metric,
.contact-item,
.role-card,
.save-row {
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 0.75rem;
}

.metric-label,
.contact-item-label {
  margin-bottom: 0.25rem;
  color: var(--slate);
  font-size: 0.75rem;
  text-transform: uppercase;
}

.metric-value {
  font-size: 0.875rem;
  font-weight: 500;
}

.role-card {
  padding: 1rem;
  background: rgba(255, 255, 255, 0.7);
}

.role-card-title {
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

.role-card-body {
  color: var(--slate);
  font-size: 0.875rem;
}

@media (min-width: 768px) {
  .home-hero {
    grid-template-columns: 1fr auto 1fr;
    padding: 3rem;
  }

  .home-divider {
    width: 1px;
    height: auto;
  }

  .home-title {
    font-size: 3rem;
  }
}

/* === Resume === */
.resume-page {
  position: relative;
  width: 100%;
  height: 100vh;
  overflow: hidden;
}

.resume-back {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  z-index: 10;
}

.resume-frame {
  width: 100%;
  height: 100%;
  border: 0;
}

/* === Contact === */
.contact-page {
  max-width: 56rem;
  margin: 0 auto;
  padding: 1.5rem 1rem;
}

.contact-toolbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.contact-toolbar-title {
  font-size: 0.875rem;
  font-weight: 500;
}

.contact-card {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.contact-banner {
  height: 10rem;
  background: linear-gradient(120deg, #60a5fa, #dbeafe, #3b82f6);
}

.contact-body {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.25rem;
}

.contact-profile {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  gap: 1rem;
}

.contact-portrait {
  width: 7rem;
  height: 7rem;
  margin-top: -4rem;
  border: 4px solid var(--paper);
  border-radius: 50%;
  object-fit: cover;
  object-position: 50% 30%;
}

.contact-name {
  margin: 0;
  font-size: 1.5rem;
  font-weight: 600;
  letter-spacing: -0.01em;
}

.contact-grid {
  display: grid;
  gap: 0.75rem;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.contact-item-value {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  color: var(--ink);
}

.contact-item-link {
  text-decoration: none;
}

.contact-item-link:hover {
  color: var(--sky);
}

.contact-item-icon {
  min-width: 1rem;
  color: var(--slate);
  font-size: 0.75rem;
  font-weight: 600;
}

.save-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.save-row-title {
  margin-bottom: 0.25rem;
  font-size: 0.875rem;
  font-weight: 500;
}

/* === QR Codes === */
.qr-grid {
  display: grid;
  gap: 0.5rem;
  grid-template-columns: repeat(2, 1fr);
}

@media (min-width: 640px) {
  .qr-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

@media (min-width: 768px) {
  .qr-grid {
    grid-template-columns: repeat(5, 1fr);
  }
}

.qr-card {
  display: block;
  width: 100%;
  padding: 0;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.9);
  font: inherit;
  text-align: left;
  cursor: zoom-in;
  overflow: hidden;
}

.qr-card-label {
  padding: 0.375rem 0.25rem;
  text-align: center;
  font-size: 0.6875rem;
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
}

.qr-card-frame {
  padding: 4px;
}

.qr-card-image {
  display: block;
  width: 100%;
  aspect-ratio: 1 / 1;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: var(--paper);
}

.qr-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.45);
  backdrop-filter: blur(4px);
  cursor: zoom-out;
}

.qr-overlay-image {
  width: 20rem;
  height: 20rem;
  max-width: 90vw;
  padding: 0.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--paper);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  cursor: default;
}
"#;
