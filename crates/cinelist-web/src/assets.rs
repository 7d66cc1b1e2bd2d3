//! Static assets served by the app itself.

/// Site stylesheet.
pub const STYLE_CSS: &str = r"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
:root {
    --bg: #0b0b0f;
    --fg: #f5f5f7;
    --muted: #9a9aa5;
    --border: #26262e;
    --card-hover: #16161c;
    --danger: #f05252;
    --green: #22c55e;
    --yellow: #eab308;
    --red: #ef4444;
}
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; line-height: 1.5; }
a { color: inherit; text-decoration: none; }
.container { width: 100%; max-width: 1100px; margin: 0 auto; padding: 0 1rem; }
.page { padding-top: 1.5rem; padding-bottom: 3rem; }
.muted { color: var(--muted); }
.site-header { position: sticky; top: 0; z-index: 10; border-bottom: 1px solid var(--border); background: rgba(11, 11, 15, 0.9); backdrop-filter: blur(6px); }
.site-header .container { display: flex; align-items: center; height: 3.5rem; }
.brand { font-weight: 700; display: flex; gap: 0.5rem; align-items: center; }
.search-bar { display: flex; gap: 0.5rem; max-width: 42rem; margin: 0 auto 2rem; }
.search-bar input { flex: 1; padding: 0.5rem 0.75rem; border-radius: 6px; border: 1px solid var(--border); background: transparent; color: var(--fg); }
.search-bar button, .button { padding: 0.5rem 1rem; border-radius: 6px; border: 0; background: var(--fg); color: var(--bg); font-weight: 600; cursor: pointer; }
.movie-list { display: flex; flex-direction: column; gap: 1rem; }
.movie-list h2 { font-size: 1.25rem; }
.movie-card { display: flex; gap: 1rem; padding: 1rem; border: 1px solid var(--border); border-radius: 8px; transition: background 0.15s; }
.movie-card:hover { background: var(--card-hover); }
.card-poster { width: 6rem; height: 8rem; object-fit: cover; border-radius: 6px; flex-shrink: 0; }
.card-body h3 { font-size: 1.1rem; }
.card-meta { display: flex; gap: 0.5rem; align-items: center; margin-top: 0.25rem; font-size: 0.875rem; }
.overview { margin-top: 0.5rem; font-size: 0.875rem; color: var(--muted); display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.rating-green { color: var(--green); }
.rating-yellow { color: var(--yellow); }
.rating-red { color: var(--red); }
.rating-pill { border: 1px solid currentColor; border-radius: 6px; padding: 0.1rem 0.6rem; font-weight: 600; font-size: 0.875rem; }
.error-message { display: flex; gap: 0.5rem; justify-content: center; align-items: center; padding: 1.5rem; border-radius: 8px; color: var(--danger); background: rgba(240, 82, 82, 0.1); }
.detail { position: relative; }
.backdrop { position: absolute; inset: 0; height: 50vh; overflow: hidden; }
.backdrop img { width: 100%; height: 100%; object-fit: cover; opacity: 0.3; }
.backdrop::after { content: ''; position: absolute; inset: 0; background: linear-gradient(transparent, var(--bg)); }
.detail-body { position: relative; z-index: 1; padding-top: 6rem; padding-bottom: 3rem; }
.back-link { display: inline-block; margin-bottom: 1.5rem; font-size: 0.875rem; }
.detail-grid { display: grid; gap: 2rem; grid-template-columns: 300px 1fr; }
.detail-poster { width: 100%; aspect-ratio: 2 / 3; object-fit: cover; border-radius: 8px; border: 1px solid var(--border); }
.detail-info { display: flex; flex-direction: column; gap: 1.5rem; }
.detail-info h1 { font-size: 2.25rem; line-height: 1.2; }
.facts { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; font-size: 0.875rem; }
.genres { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.genre-pill { border: 1px solid var(--border); border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.75rem; font-weight: 600; }
.not-found { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 50vh; text-align: center; gap: 1rem; }
@media (max-width: 768px) { .detail-grid { grid-template-columns: 1fr; } }
";

/// Neutral placeholder image for missing posters and backdrops.
///
/// Scales to whatever box it is drawn in, so the `height`/`width` query
/// of the placeholder URLs only documents the intended aspect ratio.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 750" preserveAspectRatio="xMidYMid slice">
<rect width="500" height="750" fill="#1f1f26"/>
<path d="M190 320h120v110H190z" fill="none" stroke="#5b5b66" stroke-width="8"/>
<circle cx="225" cy="355" r="12" fill="#5b5b66"/>
<path d="M196 424l40-44 28 28 18-18 26 34" fill="none" stroke="#5b5b66" stroke-width="8"/>
</svg>
"##;
