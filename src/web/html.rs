/// Single-page Leaflet frontend served at `/`. Everything dynamic comes
/// from the JSON API.
pub const PENDANT_MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Medieval Pendants: A Geographic Journey</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
<script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
<style>
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { font-family: Georgia, 'Times New Roman', serif; color: #2b2b2b; background: #faf8f4; }

  header { padding: 26px 32px 16px; border-bottom: 2px solid #d8cfc0; }
  header h1 { font-size: 28px; color: #5a3e2b; }
  .byline { margin-top: 6px; color: #8a7a66; font-size: 14px; font-style: italic; }

  .layout { display: flex; height: calc(100vh - 95px); }

  aside {
    width: 280px; min-width: 280px; overflow-y: auto;
    padding: 18px 20px; border-right: 1px solid #d8cfc0; background: #f3eee5;
    font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 13px;
  }
  aside h2 { font-size: 13px; text-transform: uppercase; letter-spacing: 1px; color: #5a3e2b; margin-bottom: 10px; }
  .group { margin-bottom: 16px; }
  .group h3 { font-size: 12px; color: #8a7a66; text-transform: uppercase; margin-bottom: 6px; }
  .group label { display: block; margin: 3px 0; cursor: pointer; }
  .group input { margin-right: 6px; }
  select { width: 100%; padding: 5px 6px; border: 1px solid #c7bba8; background: #fff; font-size: 13px; }
  .count { margin: 14px 0; padding: 8px 10px; background: #fff; border: 1px solid #c7bba8; }
  .count span { font-weight: bold; color: #5a3e2b; }
  button, .dl {
    display: inline-block; padding: 6px 14px; margin-right: 8px; cursor: pointer;
    border: 1px solid #5a3e2b; background: none; color: #5a3e2b;
    font-family: inherit; font-size: 12px; text-decoration: none;
  }
  button:hover, .dl:hover { background: #5a3e2b; color: #f3eee5; }

  .map-wrap { flex: 1; position: relative; }
  #map { width: 100%; height: 100%; }
  .legend {
    position: absolute; bottom: 16px; left: 16px; z-index: 1000;
    background: rgba(255,255,255,0.92); border: 1px solid #c7bba8;
    padding: 8px 12px; font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 12px;
  }
  .legend-row { display: flex; align-items: center; gap: 6px; margin: 2px 0; }
  .legend-dot { width: 10px; height: 10px; border-radius: 50%; display: inline-block; }
</style>
</head>
<body>

<header>
  <h1>Medieval Pendants: A Geographic Journey</h1>
  <div class="byline">January 2026 &middot; 10 minute read</div>
</header>

<div class="layout">
  <aside>
    <h2>Filters</h2>
    <div class="group">
      <h3>Century</h3>
      <select id="century"><option value="">All centuries</option></select>
    </div>
    <div id="groups"></div>
    <div class="count">Showing <span id="match-count">0</span> pendant(s)</div>
    <button onclick="resetFilters()">Reset</button>
    <a class="dl" id="csv-link" href="/api/export?format=csv">Download CSV</a>
  </aside>

  <div class="map-wrap">
    <div id="map"></div>
    <div class="legend" id="legend"></div>
  </div>
</div>

<script>
// Checkbox groups in display order: [heading, query parameter, options key].
const GROUPS = [
  ['Shape', 'shapes', 'shapes'],
  ['Material', 'materials', 'materials'],
  ['Region', 'regions', 'regions'],
  ['Size', 'sizes', 'sizes'],
  ['Function', 'functions', 'functions'],
  ['Preservation', 'preservation', 'preservation_statuses'],
];

const map = L.map('map', { center: [48.0, 10.0], zoom: 4 });
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  maxZoom: 19,
  attribution: '&copy; OpenStreetMap contributors',
}).addTo(map);
const markerLayer = L.layerGroup().addTo(map);

function ordinal(n) {
  const rem = n % 100;
  if (rem >= 11 && rem <= 13) return n + 'th';
  return n + ({1: 'st', 2: 'nd', 3: 'rd'}[n % 10] || 'th');
}

async function init() {
  const opts = await fetch('/api/options').then(r => r.json());

  const century = document.getElementById('century');
  for (const c of opts.centuries) {
    const o = document.createElement('option');
    o.value = c;
    o.textContent = ordinal(c) + ' century';
    century.appendChild(o);
  }
  century.addEventListener('change', refresh);

  const groups = document.getElementById('groups');
  for (const [heading, param, key] of GROUPS) {
    const div = document.createElement('div');
    div.className = 'group';
    const h = document.createElement('h3');
    h.textContent = heading;
    div.appendChild(h);
    for (const value of opts[key]) {
      const label = document.createElement('label');
      const box = document.createElement('input');
      box.type = 'checkbox';
      box.value = value;
      box.dataset.param = param;
      box.addEventListener('change', refresh);
      label.appendChild(box);
      label.appendChild(document.createTextNode(value));
      div.appendChild(label);
    }
    groups.appendChild(div);
  }

  await refresh();
}

function activeQuery() {
  const params = new URLSearchParams();
  const century = document.getElementById('century').value;
  if (century !== '') params.set('century', century);

  const checked = {};
  for (const box of document.querySelectorAll('input[type=checkbox]:checked')) {
    (checked[box.dataset.param] = checked[box.dataset.param] || []).push(box.value);
  }
  for (const [param, values] of Object.entries(checked)) {
    params.set(param, values.join(','));
  }
  return params.toString();
}

async function refresh() {
  const qs = activeQuery();
  const data = await fetch('/api/markers' + (qs ? '?' + qs : '')).then(r => r.json());

  markerLayer.clearLayers();
  for (const m of data.markers) {
    L.circleMarker([m.lat, m.lon], {
      radius: 7,
      weight: 1,
      color: '#ffffff',
      fillColor: m.color,
      fillOpacity: 0.85,
    })
      .bindPopup(m.popup_html, { maxWidth: 250 })
      .bindTooltip(m.name)
      .addTo(markerLayer);
  }

  document.getElementById('match-count').textContent = data.count;

  const legend = document.getElementById('legend');
  legend.innerHTML = '';
  for (const e of data.legend) {
    const row = document.createElement('div');
    row.className = 'legend-row';
    const dot = document.createElement('span');
    dot.className = 'legend-dot';
    dot.style.background = e.color;
    row.appendChild(dot);
    row.appendChild(document.createTextNode(e.label));
    legend.appendChild(row);
  }

  document.getElementById('csv-link').href = '/api/export?format=csv' + (qs ? '&' + qs : '');
}

function resetFilters() {
  document.getElementById('century').value = '';
  for (const box of document.querySelectorAll('input[type=checkbox]:checked')) {
    box.checked = false;
  }
  refresh();
}

init();
</script>
</body>
</html>
"#;
